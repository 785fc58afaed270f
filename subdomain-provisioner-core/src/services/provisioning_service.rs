//! Record provisioning service and the end-to-end run

use std::path::Path;
use std::sync::Arc;

use subdomain_provisioner_provider::{create_provider, DnsProvider, ProviderError};

use crate::config::ProvisionerConfig;
use crate::error::{CoreError, CoreResult};
use crate::services::{load_input, validate_record};
use crate::types::{ProvisionOutcome, RecordRequest};

/// Creates validated records through a DNS provider
pub struct ProvisioningService {
    provider: Arc<dyn DnsProvider>,
    base_domain: String,
}

impl ProvisioningService {
    /// Create a service around an existing provider
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>, base_domain: impl Into<String>) -> Self {
        Self {
            provider,
            base_domain: base_domain.into(),
        }
    }

    /// Build the provider named by the configuration.
    ///
    /// The provider selector is checked before the credentials, and neither
    /// check touches the network.
    pub fn from_config(config: &ProvisionerConfig) -> CoreResult<Self> {
        let provider_type = config.provider_type()?;
        let credentials = config.provider_credentials(provider_type)?;
        let provider = create_provider(credentials, config.api_base.as_deref())
            .map_err(|e| CoreError::ProviderUnavailable(Box::new(e)))?;
        Ok(Self::new(provider, config.base_domain.clone()))
    }

    /// Create one record.
    ///
    /// An "already exists" answer from the provider is a success.
    pub async fn provision(&self, request: &RecordRequest) -> CoreResult<ProvisionOutcome> {
        let create = request.to_create_request(&self.base_domain);
        let fqdn = create.name.clone();

        log::info!(
            "Creating {} record {} -> {} via {}",
            create.record_type,
            fqdn,
            create.content,
            self.provider.id()
        );

        match self.provider.create_record(&create).await {
            Ok(record) => {
                match &record.id {
                    Some(id) => log::info!("Created {fqdn} (record id {id})"),
                    None => log::info!("Created {fqdn}"),
                }
                Ok(ProvisionOutcome::Created {
                    fqdn,
                    record_id: record.id,
                })
            }
            Err(ProviderError::RecordExists { raw_message, .. }) => {
                log::info!(
                    "{fqdn} already exists, nothing to do ({})",
                    raw_message.as_deref().unwrap_or("no provider message")
                );
                Ok(ProvisionOutcome::AlreadyExists { fqdn })
            }
            Err(e) => Err(CoreError::from_provider(fqdn, create.content, e)),
        }
    }
}

/// Run one provisioning pass: load, validate, resolve the provider, create.
///
/// Input problems are reported before configuration problems, so a bad
/// input file fails the same way with or without credentials.
pub async fn run(input: &Path, config: &ProvisionerConfig) -> CoreResult<ProvisionOutcome> {
    log::debug!("Configuration: {config:?}");

    let raw = load_input(input)?;
    let request = validate_record(&raw)?;
    let service = ProvisioningService::from_config(config)?;

    service.provision(&request).await
}
