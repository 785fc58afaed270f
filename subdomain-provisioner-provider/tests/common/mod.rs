//! Shared test helpers for the provider integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use subdomain_provisioner_provider::{
    CreateDnsRecordRequest, DnsProvider, DnsRecordType, ProviderCredentials, create_provider,
};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ZONE_ID: &str = "023e105f4ecef8ad9ca31a8372d0c353";

/// Assert a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Path of the record-creation endpoint for the test zone.
pub fn records_path() -> String {
    format!("/zones/{TEST_ZONE_ID}/dns_records")
}

/// Cloudflare provider pointed at the mock server.
pub fn provider_for(server: &MockServer) -> Arc<dyn DnsProvider> {
    let credentials = ProviderCredentials::Cloudflare {
        api_token: TEST_TOKEN.to_string(),
        zone_id: TEST_ZONE_ID.to_string(),
    };
    match create_provider(credentials, Some(&server.uri())) {
        Ok(provider) => provider,
        Err(e) => panic!("failed to create provider: {e}"),
    }
}

pub fn cname_request(name: &str, target: &str) -> CreateDnsRecordRequest {
    CreateDnsRecordRequest {
        name: name.to_string(),
        record_type: DnsRecordType::Cname,
        content: target.to_string(),
        ttl: 300,
        proxied: true,
    }
}

/// Successful Cloudflare envelope for a created record.
pub fn success_body(id: &str, name: &str, content: &str) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": {
            "id": id,
            "type": "CNAME",
            "name": name,
            "content": content,
            "proxied": true,
            "ttl": 300
        }
    })
}

/// Failed Cloudflare envelope with the given `(code, message)` entries.
pub fn error_body(errors: &[(i64, &str)]) -> Value {
    let errors: Vec<Value> = errors
        .iter()
        .map(|(code, message)| json!({ "code": code, "message": message }))
        .collect();
    json!({
        "success": false,
        "errors": errors,
        "messages": [],
        "result": null
    })
}
