/// Unified error type for DNS provider operations.
///
/// Each variant carries a `provider` field identifying which provider produced
/// the error, plus variant-specific context. None of them is retried: the
/// provisioner makes exactly one call per run and reports whatever came back.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A DNS record with the same name/type already exists.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider rejected a request parameter (bad name, malformed target, bad TTL...).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// The provider's own description of what is wrong.
        detail: String,
    },

    /// The zone's record quota has been exceeded.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if the API sent `Retry-After`.
        retry_after: Option<u64>,
        /// Raw response body, if available.
        raw_message: Option<String>,
    },

    /// The zone could not be found (usually a wrong zone identifier).
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone identifier or name that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A non-success HTTP status whose body carried no usable error list.
    UnexpectedResponse {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// Catch-all for error codes not present in the provider's code table.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (user input, resource state), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::InvalidParameter { .. }
                | Self::QuotaExceeded { .. }
                | Self::DomainNotFound { .. }
        )
    }

    /// Identifier of the provider that produced the error.
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::RecordExists { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::QuotaExceeded { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::DomainNotFound { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::UnexpectedResponse { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::QuotaExceeded {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Quota exceeded: {msg}")
                } else {
                    write!(f, "[{provider}] Quota exceeded")
                }
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{domain}' not found")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::UnexpectedResponse {
                provider,
                status,
                body,
            } => {
                write!(f, "[{provider}] HTTP {status}: {body}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] Error {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "cloudflare".to_string(),
            raw_message: Some("Authentication error".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Invalid credentials: Authentication error"
        );
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "cloudflare".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Invalid credentials");
    }

    #[test]
    fn display_record_exists() {
        let e = ProviderError::RecordExists {
            provider: "cloudflare".to_string(),
            record_name: "demo.is-a.shop".to_string(),
            raw_message: None,
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Record 'demo.is-a.shop' already exists"
        );
    }

    #[test]
    fn display_invalid_parameter_keeps_provider_text() {
        let e = ProviderError::InvalidParameter {
            provider: "cloudflare".to_string(),
            param: "content".to_string(),
            detail: "Content for A record is invalid".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Invalid parameter 'content': Content for A record is invalid"
        );
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "cloudflare".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_rate_limited_without_retry() {
        let e = ProviderError::RateLimited {
            provider: "cloudflare".to_string(),
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Rate limited");
    }

    #[test]
    fn display_domain_not_found() {
        let e = ProviderError::DomainNotFound {
            provider: "cloudflare".to_string(),
            domain: "zone-123".to_string(),
            raw_message: Some("Could not route".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Zone 'zone-123' not found: Could not route"
        );
    }

    #[test]
    fn display_unexpected_response_includes_status_and_body() {
        let e = ProviderError::UnexpectedResponse {
            provider: "cloudflare".to_string(),
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] HTTP 502: <html>Bad Gateway</html>"
        );
    }

    #[test]
    fn display_unknown_with_and_without_code() {
        let with_code = ProviderError::Unknown {
            provider: "cloudflare".to_string(),
            raw_code: Some("99999".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(
            with_code.to_string(),
            "[cloudflare] Error 99999: something broke"
        );

        let without_code = ProviderError::Unknown {
            provider: "cloudflare".to_string(),
            raw_code: None,
            raw_message: "something broke".to_string(),
        };
        assert_eq!(without_code.to_string(), "[cloudflare] something broke");
    }

    #[test]
    fn expected_variants() {
        assert!(
            ProviderError::InvalidParameter {
                provider: "t".into(),
                param: "name".into(),
                detail: "bad".into(),
            }
            .is_expected()
        );
        assert!(
            ProviderError::RecordExists {
                provider: "t".into(),
                record_name: "www".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::UnexpectedResponse {
                provider: "t".into(),
                status: 500,
                body: String::new(),
            }
            .is_expected()
        );
    }

    #[test]
    fn provider_accessor() {
        let e = ProviderError::Timeout {
            provider: "cloudflare".into(),
            detail: "30s".into(),
        };
        assert_eq!(e.provider(), "cloudflare");
    }
}
