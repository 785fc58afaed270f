//! Cloudflare `DnsProvider` implementation

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{CreateDnsRecordRequest, CreatedRecord};

use super::CloudflareProvider;

#[derive(Serialize)]
struct CreateRecordBody<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    content: &'a str,
    ttl: u32,
    proxied: bool,
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<CreatedRecord> {
        let body = CreateRecordBody {
            record_type: req.record_type.as_str(),
            name: &req.name,
            content: &req.content,
            ttl: req.ttl,
            proxied: req.proxied,
        };

        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            zone_id: Some(self.zone_id.clone()),
        };

        let cf_record = self
            .post_record(&format!("/zones/{}/dns_records", self.zone_id), &body, context)
            .await?;

        if let Some(ref r) = cf_record {
            log::debug!(
                "[cloudflare] Created record {}: {} {} -> {} (proxied: {:?})",
                r.id,
                r.record_type.as_deref().unwrap_or("?"),
                r.name.as_deref().unwrap_or(req.name.as_str()),
                r.content.as_deref().unwrap_or(req.content.as_str()),
                r.proxied
            );
        }

        Ok(CreatedRecord {
            name: req.name.clone(),
            id: cf_record.map(|r| r.id),
        })
    }
}
