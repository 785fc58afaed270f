//! Cloudflare HTTP request methods

use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper};
use crate::utils::log_sanitizer::truncate_for_log;

use super::error::primary_error;
use super::{CloudflareDnsRecord, CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    /// Execute a POST that creates a DNS record.
    ///
    /// HTTP 200 is success whatever the body says; the created record is
    /// returned only if the body could be parsed. Any other status is turned
    /// into an error via the response's `errors` array.
    pub(crate) async fn post_record<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<Option<CloudflareDnsRecord>> {
        let url = format!("{}{path}", self.api_base);
        let body_json =
            serde_json::to_string(body).unwrap_or_else(|_| "<unserializable body>".to_string());
        log::debug!("[{}] Request Body: {body_json}", self.provider_name());

        let request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        if status == 200 {
            let record = HttpUtils::parse_json::<CloudflareResponse<CloudflareDnsRecord>>(
                &response_text,
                self.provider_name(),
            )
            .ok()
            .and_then(|r| {
                if !r.success {
                    log::warn!(
                        "[{}] HTTP 200 with success=false, treating as created",
                        self.provider_name()
                    );
                }
                r.result
            });
            return Ok(record);
        }

        Err(self.error_from_response(status, &response_text, context))
    }

    /// Turn a non-200 response into a [`ProviderError`].
    fn error_from_response(&self, status: u16, text: &str, context: ErrorContext) -> ProviderError {
        let raw = HttpUtils::parse_json::<CloudflareResponse<serde_json::Value>>(
            text,
            self.provider_name(),
        )
        .ok()
        .and_then(|response| primary_error(&response.errors));

        let Some(raw) = raw else {
            log::error!(
                "[{}] HTTP {status} without a usable error list: {}",
                self.provider_name(),
                truncate_for_log(text)
            );
            return ProviderError::UnexpectedResponse {
                provider: self.provider_name().to_string(),
                status,
                body: text.to_string(),
            };
        };

        let error = self.map_error(raw, context);
        if error.is_expected() {
            log::warn!("[{}] API error (HTTP {status}): {error}", self.provider_name());
        } else {
            log::error!(
                "[{}] API error (HTTP {status}): {error}; body: {}",
                self.provider_name(),
                truncate_for_log(text)
            );
        }
        error
    }
}
