//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

// Re-export library error types
pub use subdomain_provisioner_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
///
/// Every variant is terminal for the run. A provider "already exists"
/// answer is not an error; it surfaces as
/// [`ProvisionOutcome::AlreadyExists`](crate::types::ProvisionOutcome::AlreadyExists).
#[derive(Error, Debug)]
pub enum CoreError {
    /// The input file does not exist or cannot be read
    #[error("Input file '{}' could not be read: {detail}", .path.display())]
    FileNotFound { path: PathBuf, detail: String },

    /// The input file is not a JSON object
    #[error("Input file '{}' is not a valid JSON object: {detail}", .path.display())]
    MalformedInput { path: PathBuf, detail: String },

    /// A required field is absent, not a string, or blank
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// The subdomain contains characters other than ASCII letters, digits and hyphens
    #[error("Invalid subdomain '{0}': only letters, digits and hyphens are allowed")]
    InvalidSubdomain(String),

    /// The record type is not one of the supported types
    #[error("Unsupported record type '{0}': expected A or CNAME")]
    UnsupportedRecordType(String),

    /// Provider credentials are absent or blank
    #[error("{0}")]
    MissingCredentials(#[from] CredentialValidationError),

    /// The configured provider selector names no implemented provider
    #[error("Unsupported DNS provider '{0}'")]
    UnsupportedProvider(String),

    /// The provider rejected the record as invalid
    #[error("Provider rejected {fqdn} -> {target}: {source}")]
    ProviderValidationFailed {
        fqdn: String,
        target: String,
        source: Box<ProviderError>,
    },

    /// Any other failure of the provider call
    #[error("Failed to create {fqdn} -> {target}: {source}")]
    ProviderGenericFailure {
        fqdn: String,
        target: String,
        source: Box<ProviderError>,
    },

    /// The provider client could not be set up (no request was sent)
    #[error("DNS provider could not be initialized: {0}")]
    ProviderUnavailable(#[source] Box<ProviderError>),
}

impl CoreError {
    /// Classify a failed provider call for `fqdn -> target`.
    ///
    /// `InvalidParameter` is a validation failure; everything else is generic.
    /// Callers handle `RecordExists` before getting here.
    #[must_use]
    pub fn from_provider(
        fqdn: impl Into<String>,
        target: impl Into<String>,
        source: ProviderError,
    ) -> Self {
        let (fqdn, target) = (fqdn.into(), target.into());
        match source {
            ProviderError::InvalidParameter { .. } => Self::ProviderValidationFailed {
                fqdn,
                target,
                source: Box::new(source),
            },
            _ => Self::ProviderGenericFailure {
                fqdn,
                target,
                source: Box::new(source),
            },
        }
    }

    /// Stable name of the error kind, printed in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "FileNotFound",
            Self::MalformedInput { .. } => "MalformedInput",
            Self::MissingField(_) => "MissingField",
            Self::InvalidSubdomain(_) => "InvalidSubdomain",
            Self::UnsupportedRecordType(_) => "UnsupportedRecordType",
            Self::MissingCredentials(_) => "MissingCredentials",
            Self::UnsupportedProvider(_) => "UnsupportedProvider",
            Self::ProviderValidationFailed { .. } => "ProviderValidationFailed",
            Self::ProviderGenericFailure { .. } => "ProviderGenericFailure",
            Self::ProviderUnavailable(_) => "ProviderUnavailable",
        }
    }

    /// Whether it is expected behavior (bad input, provider rejection), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FileNotFound { .. }
            | Self::MalformedInput { .. }
            | Self::MissingField(_)
            | Self::InvalidSubdomain(_)
            | Self::UnsupportedRecordType(_)
            | Self::MissingCredentials(_)
            | Self::UnsupportedProvider(_)
            | Self::ProviderValidationFailed { .. } => true,
            Self::ProviderGenericFailure { source, .. } => source.is_expected(),
            Self::ProviderUnavailable(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
