use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Cloudflare DNS.
    Cloudflare,
    // GoDaddy would slot in here with its own credentials variant.
}

impl ProviderType {
    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cloudflare" => Ok(Self::Cloudflare),
            _ => Err(s.to_string()),
        }
    }
}

// ============ DNS Record Types ============

/// Record types the provisioner is allowed to create.
///
/// Other types are rejected before any provider call is made.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// Canonical name (alias) record.
    #[default]
    #[serde(rename = "CNAME")]
    Cname,
}

impl DnsRecordType {
    /// Uppercase wire name (`"A"`, `"CNAME"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsRecordType {
    type Err = String;

    /// Case-insensitive: the value is uppercased before matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            _ => Err(s.to_string()),
        }
    }
}

// ============ Requests / Results ============

/// Request to create a single DNS record in the provider's configured zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDnsRecordRequest {
    /// Fully-qualified record name (e.g., `"demo.is-a.shop"`).
    pub name: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record content: hostname for CNAME, IPv4 address for A.
    pub content: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Route traffic through the provider's edge network.
    pub proxied: bool,
}

/// A record the provider confirmed as created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedRecord {
    /// Fully-qualified record name that was requested.
    pub name: String,
    /// Provider-assigned record ID, when the response body carried one.
    pub id: Option<String>,
}

// ============ Credentials ============

/// Structured credential validation error.
///
/// Returned by [`ProviderCredentials::from_map`] when a required field is
/// missing or blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl CredentialValidationError {
    /// Machine-readable key of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. } | Self::EmptyField { field, .. } => field,
        }
    }
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField {
                provider, label, ..
            } => write!(f, "[{provider}] Missing required credential: {label}"),
            Self::EmptyField {
                provider, label, ..
            } => write!(f, "[{provider}] Credential must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for the supported DNS providers.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Cloudflare credentials.
    #[serde(rename = "cloudflare")]
    Cloudflare {
        /// Cloudflare API token (needs `Zone.DNS:Edit`).
        api_token: String,
        /// Identifier of the zone records are created in.
        zone_id: String,
    },
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cloudflare { zone_id, .. } => f
                .debug_struct("Cloudflare")
                .field("api_token", &"<redacted>")
                .field("zone_id", zone_id)
                .finish(),
        }
    }
}

impl ProviderCredentials {
    /// Build typed credentials from a field map.
    ///
    /// Cloudflare expects `apiToken` and `zoneId`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing or blank.
    pub fn from_map(
        provider: ProviderType,
        map: &HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            ProviderType::Cloudflare => Ok(Self::Cloudflare {
                api_token: Self::get_required_field(provider, map, "apiToken", "API Token")?,
                zone_id: Self::get_required_field(provider, map, "zoneId", "Zone ID")?,
            }),
        }
    }

    fn get_required_field(
        provider: ProviderType,
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                provider,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(value) if value.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                provider,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(value) => Ok(value.trim().to_string()),
        }
    }
}
