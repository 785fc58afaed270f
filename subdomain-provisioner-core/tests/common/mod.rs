//! Shared helpers for the end-to-end provisioning tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::io::Write;

use serde_json::{json, Value};
use subdomain_provisioner_core::ProvisionerConfig;
use tempfile::NamedTempFile;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ZONE_ID: &str = "zone-123";

pub fn records_path() -> String {
    format!("/zones/{TEST_ZONE_ID}/dns_records")
}

/// Write `contents` to a fresh temporary input file.
pub fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Configuration from an explicit variable list.
pub fn config_with(vars: &[(&str, &str)]) -> ProvisionerConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    ProvisionerConfig::from_lookup(|key| vars.get(key).cloned())
}

/// Full Cloudflare configuration pointed at the mock server.
pub fn config_for(server: &MockServer) -> ProvisionerConfig {
    let uri = server.uri();
    config_with(&[
        ("CLOUDFLARE_API_TOKEN", TEST_TOKEN),
        ("CLOUDFLARE_ZONE_ID", TEST_ZONE_ID),
        ("CLOUDFLARE_API_BASE", uri.as_str()),
    ])
}

pub fn created_body(name: &str, content: &str) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": {
            "id": "372e67954025e0ba6aaa6d586b9e0b59",
            "type": "CNAME",
            "name": name,
            "content": content,
            "proxied": true,
            "ttl": 300
        }
    })
}

pub fn error_body(code: i64, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null
    })
}
