//! Field validation and normalization of the input object

use serde_json::{Map, Value};
use subdomain_provisioner_provider::DnsRecordType;

use crate::error::{CoreError, CoreResult};
use crate::types::RecordRequest;

const FIELD_SUBDOMAIN: &str = "subdomain";
const FIELD_TARGET: &str = "target";
const FIELD_RECORD_TYPE: &str = "record_type";

/// Extract and normalize the record request from a parsed input object.
///
/// Both required fields are checked for presence before the subdomain's
/// characters are inspected. Unknown fields are ignored.
pub fn validate_record(input: &Map<String, Value>) -> CoreResult<RecordRequest> {
    let subdomain = required_string(input, FIELD_SUBDOMAIN)?;
    let target = required_string(input, FIELD_TARGET)?;

    if !is_valid_subdomain(subdomain) {
        return Err(CoreError::InvalidSubdomain(subdomain.to_string()));
    }

    let record_type = parse_record_type(input.get(FIELD_RECORD_TYPE))?;

    Ok(RecordRequest {
        subdomain: subdomain.to_ascii_lowercase(),
        target: target.trim().to_lowercase(),
        record_type,
    })
}

/// A string field that is present and not blank.
fn required_string<'a>(input: &'a Map<String, Value>, field: &'static str) -> CoreResult<&'a str> {
    match input.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        _ => Err(CoreError::MissingField(field)),
    }
}

/// ASCII letters, digits and hyphens only.
fn is_valid_subdomain(subdomain: &str) -> bool {
    !subdomain.is_empty()
        && subdomain
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn parse_record_type(value: Option<&Value>) -> CoreResult<DnsRecordType> {
    match value {
        None | Some(Value::Null) => Ok(DnsRecordType::default()),
        Some(Value::String(s)) => s
            .parse()
            .map_err(|_| CoreError::UnsupportedRecordType(s.clone())),
        Some(other) => Err(CoreError::UnsupportedRecordType(other.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn validate(value: Value) -> CoreResult<RecordRequest> {
        validate_record(&object(value))
    }

    #[test]
    fn lowercases_and_defaults_to_cname() {
        let request = validate(json!({"subdomain": "Demo-1", "target": "User.GitHub.io"})).unwrap();
        assert_eq!(
            request,
            RecordRequest {
                subdomain: "demo-1".into(),
                target: "user.github.io".into(),
                record_type: DnsRecordType::Cname,
            }
        );
    }

    #[test]
    fn trims_target() {
        let request = validate(json!({"subdomain": "demo", "target": "  user.github.io \n"})).unwrap();
        assert_eq!(request.target, "user.github.io");
    }

    #[test]
    fn record_type_is_uppercased() {
        let request =
            validate(json!({"subdomain": "box", "target": "192.0.2.1", "record_type": "a"})).unwrap();
        assert_eq!(request.record_type, DnsRecordType::A);
    }

    #[test]
    fn null_record_type_defaults_to_cname() {
        let request =
            validate(json!({"subdomain": "demo", "target": "x.io", "record_type": null})).unwrap();
        assert_eq!(request.record_type, DnsRecordType::Cname);
    }

    #[test]
    fn unsupported_record_type() {
        let err = validate(json!({"subdomain": "demo", "target": "x.io", "record_type": "mx"}))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedRecordType(ref t) if t == "mx"));
    }

    #[test]
    fn non_string_record_type_is_unsupported() {
        let err = validate(json!({"subdomain": "demo", "target": "x.io", "record_type": 5}))
            .unwrap_err();
        assert_eq!(err.kind(), "UnsupportedRecordType");
    }

    #[test]
    fn missing_subdomain() {
        let err = validate(json!({"target": "user.github.io"})).unwrap_err();
        assert!(matches!(err, CoreError::MissingField("subdomain")));
    }

    #[test]
    fn missing_target_reported_before_bad_subdomain() {
        let err = validate(json!({"subdomain": "bad_sub!"})).unwrap_err();
        assert!(matches!(err, CoreError::MissingField("target")));
    }

    #[test]
    fn blank_and_non_string_fields_are_missing() {
        let err = validate(json!({"subdomain": "   ", "target": "x.io"})).unwrap_err();
        assert!(matches!(err, CoreError::MissingField("subdomain")));

        let err = validate(json!({"subdomain": "demo", "target": 42})).unwrap_err();
        assert!(matches!(err, CoreError::MissingField("target")));

        let err = validate(json!({"subdomain": "demo", "target": ""})).unwrap_err();
        assert!(matches!(err, CoreError::MissingField("target")));
    }

    #[test]
    fn invalid_subdomain_characters() {
        for bad in ["bad_sub!", "a.b", " demo", "dé", "demo\n"] {
            let err = validate(json!({"subdomain": bad, "target": "x"})).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidSubdomain(ref s) if s == bad),
                "{bad:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let request =
            validate(json!({"subdomain": "demo", "target": "x.io", "owner": "someone"})).unwrap();
        assert_eq!(request.subdomain, "demo");
    }
}
