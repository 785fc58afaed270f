//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::CloudflareProvider;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// `api_base` overrides the provider's default API endpoint when set.
///
/// # Examples
///
/// ```rust,no_run
/// use subdomain_provisioner_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(
///     ProviderCredentials::Cloudflare {
///         api_token: "your-token".to_string(),
///         zone_id: "your-zone-id".to_string(),
///     },
///     None,
/// )
/// .unwrap();
/// ```
pub fn create_provider(
    credentials: ProviderCredentials,
    api_base: Option<&str>,
) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        ProviderCredentials::Cloudflare { api_token, zone_id } => {
            let mut provider = CloudflareProvider::new(api_token, zone_id)?;
            if let Some(base) = api_base {
                provider = provider.with_api_base(base);
            }
            log::debug!(
                "[cloudflare] Provider ready for zone {} via {}",
                provider.zone_id(),
                provider.api_base
            );
            Ok(Arc::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_cloudflare_provider() {
        let provider = create_provider(
            ProviderCredentials::Cloudflare {
                api_token: "token".to_string(),
                zone_id: "zone".to_string(),
            },
            Some("http://127.0.0.1:1/"),
        );
        assert!(matches!(provider, Ok(ref p) if p.id() == "cloudflare"));
    }
}
