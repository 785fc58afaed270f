//! Cloudflare API types

use serde::Deserialize;

/// Cloudflare API envelope
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudflareError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Cloudflare DNS record (response)
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub proxied: Option<bool>,
}
