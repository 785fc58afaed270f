//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CloudflareError, CloudflareProvider};

/// What a Cloudflare error code means to us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorClass {
    InvalidCredentials,
    /// Carries the name of the rejected request field.
    InvalidParameter(&'static str),
    RecordExists,
    QuotaExceeded,
    ZoneNotFound,
}

/// Cloudflare error code table.
/// Reference: <https://api.cloudflare.com/#getting-started-responses>
///
/// Codes not listed here map to [`ProviderError::Unknown`].
const ERROR_CODES: &[(&str, ErrorClass)] = &[
    // 6003: Invalid request headers
    ("6003", ErrorClass::InvalidCredentials),
    // 6103: Invalid format for X-Auth-Key header
    ("6103", ErrorClass::InvalidCredentials),
    // 6111: Invalid format for Authorization header
    ("6111", ErrorClass::InvalidCredentials),
    // 9109: Unauthorized to access requested resource
    ("9109", ErrorClass::InvalidCredentials),
    // 10000: Authentication error
    ("10000", ErrorClass::InvalidCredentials),
    // 1004: DNS Validation Error
    ("1004", ErrorClass::InvalidParameter("general")),
    // 9000: Invalid or missing name
    ("9000", ErrorClass::InvalidParameter("name")),
    // 9005: Content for A record is invalid. Must be a valid IPv4 address
    ("9005", ErrorClass::InvalidParameter("content")),
    // 9006: Content for AAAA record is invalid
    ("9006", ErrorClass::InvalidParameter("content")),
    // 9009: Content must be a hostname
    ("9009", ErrorClass::InvalidParameter("content")),
    // 9021: Invalid TTL
    ("9021", ErrorClass::InvalidParameter("ttl")),
    // 9041: This DNS record cannot be proxied
    ("9041", ErrorClass::InvalidParameter("proxied")),
    // 81053: An A, AAAA or CNAME record already exists with that host
    ("81053", ErrorClass::RecordExists),
    // 81054: A CNAME record with that host already exists
    ("81054", ErrorClass::RecordExists),
    // 81055: An A record with that host already exists
    ("81055", ErrorClass::RecordExists),
    // 81056: NS records with that host already exist
    ("81056", ErrorClass::RecordExists),
    // 81057: The record already exists
    ("81057", ErrorClass::RecordExists),
    // 81058: A record with those settings already exists
    ("81058", ErrorClass::RecordExists),
    // 81045: The record quota has been exceeded
    ("81045", ErrorClass::QuotaExceeded),
    // 7000: No route for that URI
    ("7000", ErrorClass::ZoneNotFound),
    // 7003: Could not route to /path, perhaps your object identifier is invalid?
    ("7003", ErrorClass::ZoneNotFound),
];

/// Look up a Cloudflare error code.
pub(crate) fn classify(code: &str) -> Option<ErrorClass> {
    ERROR_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, class)| *class)
}

/// Pick the entry that decides the outcome from a response's `errors` array.
///
/// An "already exists" entry wins over everything else, then the first entry
/// with a known code, then the first entry.
pub(crate) fn primary_error(errors: &[CloudflareError]) -> Option<RawApiError> {
    let class_of = |e: &CloudflareError| classify(&e.code.to_string());

    errors
        .iter()
        .find(|e| class_of(e) == Some(ErrorClass::RecordExists))
        .or_else(|| errors.iter().find(|e| class_of(e).is_some()))
        .or_else(|| errors.first())
        .map(|e| RawApiError::with_code(e.code.to_string(), e.message.clone()))
}

impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();

        match raw.code.as_deref().and_then(classify) {
            Some(ErrorClass::InvalidCredentials) => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },
            Some(ErrorClass::InvalidParameter(param)) => ProviderError::InvalidParameter {
                provider,
                param: param.to_string(),
                detail: raw.message,
            },
            Some(ErrorClass::RecordExists) => ProviderError::RecordExists {
                provider,
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            Some(ErrorClass::QuotaExceeded) => ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            },
            Some(ErrorClass::ZoneNotFound) => ProviderError::DomainNotFound {
                provider,
                domain: context.zone_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            None => self.unknown_error(raw),
        }
    }
}
