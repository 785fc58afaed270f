//! Run configuration, read once from the environment at start-up.

use std::collections::HashMap;

use subdomain_provisioner_provider::log_sanitizer::mask_secret;
use subdomain_provisioner_provider::{ProviderCredentials, ProviderType};

use crate::error::{CoreError, CoreResult};

/// Provider selector variable.
pub const ENV_PROVIDER: &str = "DNS_PROVIDER";
/// Cloudflare API token variable.
pub const ENV_CLOUDFLARE_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// Cloudflare zone identifier variable.
pub const ENV_CLOUDFLARE_ZONE_ID: &str = "CLOUDFLARE_ZONE_ID";
/// Cloudflare API base URL override.
pub const ENV_CLOUDFLARE_API_BASE: &str = "CLOUDFLARE_API_BASE";
/// Base domain appended to every subdomain.
pub const ENV_BASE_DOMAIN: &str = "DNS_BASE_DOMAIN";

/// Provider used when `DNS_PROVIDER` is unset or blank.
pub const DEFAULT_PROVIDER: &str = "cloudflare";
/// Base domain used when `DNS_BASE_DOMAIN` is unset or blank.
pub const DEFAULT_BASE_DOMAIN: &str = "is-a.shop";

const CREDENTIAL_API_TOKEN: &str = "apiToken";
const CREDENTIAL_ZONE_ID: &str = "zoneId";

/// Everything a run needs from its environment.
///
/// Credentials are collected as raw fields and only turned into typed
/// [`ProviderCredentials`] once the provider selector has been accepted.
#[derive(Clone)]
pub struct ProvisionerConfig {
    /// Raw provider selector (trimmed).
    pub provider: String,
    /// Base domain, lowercased, without a trailing dot.
    pub base_domain: String,
    /// Optional override of the provider API endpoint.
    pub api_base: Option<String>,
    /// Credential fields keyed by credential name (`apiToken`, `zoneId`).
    pub credentials: HashMap<String, String>,
}

impl ProvisionerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let provider = non_blank(ENV_PROVIDER).unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
        let base_domain = non_blank(ENV_BASE_DOMAIN).map_or_else(
            || DEFAULT_BASE_DOMAIN.to_string(),
            |d| d.trim_end_matches('.').to_ascii_lowercase(),
        );
        let api_base = non_blank(ENV_CLOUDFLARE_API_BASE);

        // Blank values are kept so credential validation can report them as empty.
        let mut credentials = HashMap::new();
        for (env_key, field) in [
            (ENV_CLOUDFLARE_API_TOKEN, CREDENTIAL_API_TOKEN),
            (ENV_CLOUDFLARE_ZONE_ID, CREDENTIAL_ZONE_ID),
        ] {
            if let Some(value) = lookup(env_key) {
                credentials.insert(field.to_string(), value);
            }
        }

        Self {
            provider,
            base_domain,
            api_base,
            credentials,
        }
    }

    /// Resolve the provider selector.
    pub fn provider_type(&self) -> CoreResult<ProviderType> {
        self.provider
            .parse()
            .map_err(|_| CoreError::UnsupportedProvider(self.provider.clone()))
    }

    /// Typed credentials for `provider`.
    pub fn provider_credentials(&self, provider: ProviderType) -> CoreResult<ProviderCredentials> {
        Ok(ProviderCredentials::from_map(provider, &self.credentials)?)
    }
}

impl std::fmt::Debug for ProvisionerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self
            .credentials
            .get(CREDENTIAL_API_TOKEN)
            .map(|t| mask_secret(t.trim()));
        f.debug_struct("ProvisionerConfig")
            .field("provider", &self.provider)
            .field("base_domain", &self.base_domain)
            .field("api_base", &self.api_base)
            .field("api_token", &token)
            .field("zone_id", &self.credentials.get(CREDENTIAL_ZONE_ID))
            .finish()
    }
}
