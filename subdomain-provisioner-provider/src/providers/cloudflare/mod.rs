//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{CloudflareDnsRecord, CloudflareError, CloudflareResponse};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare DNS Provider
///
/// Bound to a single zone: every record is created under `zone_id`.
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) zone_id: String,
    pub(crate) api_base: String,
}

impl CloudflareProvider {
    pub fn new(api_token: String, zone_id: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client("cloudflare")?,
            api_token,
            zone_id,
            api_base: CF_API_BASE.to_string(),
        })
    }

    /// Point the provider at a different API base URL (staging, mock servers).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Zone this provider writes to.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }
}
