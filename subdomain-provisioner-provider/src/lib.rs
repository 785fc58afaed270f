//! # subdomain-provisioner-provider
//!
//! DNS provider adapter used by the subdomain provisioner: one trait,
//! [`DnsProvider`], and its Cloudflare implementation.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method | Credentials |
//! |----------|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | Bearer Token | `apiToken`, `zoneId` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls, handy for static CI binaries.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use subdomain_provisioner_provider::{
//!     create_provider, CreateDnsRecordRequest, DnsRecordType, ProviderCredentials,
//!     ProviderError,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(
//!         ProviderCredentials::Cloudflare {
//!             api_token: "your-token".to_string(),
//!             zone_id: "your-zone-id".to_string(),
//!         },
//!         None,
//!     )?;
//!
//!     let request = CreateDnsRecordRequest {
//!         name: "demo.is-a.shop".to_string(),
//!         record_type: DnsRecordType::Cname,
//!         content: "user.github.io".to_string(),
//!         ttl: 300,
//!         proxied: true,
//!     };
//!
//!     match provider.create_record(&request).await {
//!         Ok(record) => println!("created {} ({:?})", record.name, record.id),
//!         Err(ProviderError::RecordExists { record_name, .. }) => {
//!             println!("{record_name} already exists");
//!         }
//!         Err(e) => return Err(e.into()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Provider error codes are translated through a lookup table, so callers
//! branch on variants such as [`ProviderError::RecordExists`] or
//! [`ProviderError::InvalidParameter`] rather than on raw codes.
//! Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CreateDnsRecordRequest, CreatedRecord, CredentialValidationError, DnsRecordType,
    ProviderCredentials, ProviderType,
};

// Re-export helpers
pub use providers::common::relative_to_full_name;
pub use utils::log_sanitizer;

// Re-export concrete providers
pub use providers::CloudflareProvider;
