//! Value objects passed between the provisioning steps.

use serde::Serialize;
use subdomain_provisioner_provider::{relative_to_full_name, CreateDnsRecordRequest, DnsRecordType};

/// TTL in seconds of every created record.
pub const DEFAULT_TTL: u32 = 300;

/// A validated record request.
///
/// Produced by [`validate_record`](crate::services::validate_record): the
/// subdomain and target are already lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    pub subdomain: String,
    pub target: String,
    pub record_type: DnsRecordType,
}

impl RecordRequest {
    /// Fully-qualified record name under `base_domain`.
    pub fn fqdn(&self, base_domain: &str) -> String {
        relative_to_full_name(&self.subdomain, base_domain)
    }

    /// Provider request for this record: fixed TTL, proxied.
    pub fn to_create_request(&self, base_domain: &str) -> CreateDnsRecordRequest {
        CreateDnsRecordRequest {
            name: self.fqdn(base_domain),
            record_type: self.record_type,
            content: self.target.clone(),
            ttl: DEFAULT_TTL,
            proxied: true,
        }
    }
}

/// Successful result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProvisionOutcome {
    /// The provider created the record.
    Created {
        fqdn: String,
        record_id: Option<String>,
    },
    /// The provider already had the record; nothing was changed.
    AlreadyExists { fqdn: String },
}

impl ProvisionOutcome {
    pub fn fqdn(&self) -> &str {
        match self {
            Self::Created { fqdn, .. } | Self::AlreadyExists { fqdn } => fqdn,
        }
    }
}
