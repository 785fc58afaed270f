//! Test helpers
//!
//! A scripted [`DnsProvider`] that records every request it receives.

use std::collections::VecDeque;

use async_trait::async_trait;
use subdomain_provisioner_provider::{
    CreateDnsRecordRequest, CreatedRecord, DnsProvider, DnsRecordType, ProviderError, Result,
};
use tokio::sync::RwLock;

use crate::types::RecordRequest;

// ===== MockDnsProvider =====

pub struct MockDnsProvider {
    responses: RwLock<VecDeque<Result<Option<String>>>>,
    calls: RwLock<Vec<CreateDnsRecordRequest>>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(VecDeque::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Queue a successful creation with the given record id.
    pub async fn push_created(&self, id: Option<&str>) {
        self.responses
            .write()
            .await
            .push_back(Ok(id.map(str::to_string)));
    }

    /// Queue a provider failure.
    pub async fn push_error(&self, err: ProviderError) {
        self.responses.write().await.push_back(Err(err));
    }

    pub async fn calls(&self) -> Vec<CreateDnsRecordRequest> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<CreatedRecord> {
        self.calls.write().await.push(req.clone());
        // An unscripted call behaves like a plain success
        let next = self.responses.write().await.pop_front().unwrap_or(Ok(None));
        next.map(|id| CreatedRecord {
            name: req.name.clone(),
            id,
        })
    }
}

// ===== Factories =====

pub fn cname_request(subdomain: &str, target: &str) -> RecordRequest {
    RecordRequest {
        subdomain: subdomain.to_string(),
        target: target.to_string(),
        record_type: DnsRecordType::Cname,
    }
}
