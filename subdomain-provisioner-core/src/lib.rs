//! Subdomain Provisioner Core Library
//!
//! Turns a small JSON descriptor into one DNS record:
//! - Input loading ([`services::load_input`])
//! - Field validation and normalization ([`services::validate_record`])
//! - Record creation through a [`DnsProvider`](subdomain_provisioner_provider::DnsProvider)
//!   ([`services::ProvisioningService`])
//!
//! Configuration is read once into a [`ProvisionerConfig`] and passed down;
//! nothing in this crate reads the environment on its own.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ProvisionerConfig;
pub use error::{CoreError, CoreResult};
pub use services::{run, ProvisioningService};
pub use types::{ProvisionOutcome, RecordRequest};
