use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateDnsRecordRequest, CreatedRecord};

/// Raw API error as reported by the provider (internal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawApiError {
    /// Error code (format differs per provider).
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra context used while mapping errors (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name (for `RecordExists`).
    pub record_name: Option<String>,
    /// Zone identifier (for `DomainNotFound`).
    pub zone_id: Option<String>,
}

/// Maps raw provider API errors onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS provider seam used by the provisioner.
///
/// Implementations make exactly one API call per [`create_record`](Self::create_record)
/// and never retry.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Create a DNS record.
    ///
    /// A provider-side "already exists" condition is reported as
    /// [`ProviderError::RecordExists`]; deciding whether that counts as success
    /// is up to the caller.
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<CreatedRecord>;
}
