//! Prisma SASE Provider implementation
//!
//! The provider holds one authenticated client and hands a clone of it to
//! every resource and data source.

use sase_core::provider::{DataSource, Provider, ProviderError, ProviderResult, Resource};
use sase_core::resource::Attributes;
use sase_core::schema::ResourceSchema;

use crate::client::SaseClient;
use crate::config::{ClientConfig, ConfigError, ProviderConfig};
use crate::resources;
use crate::schemas;

/// Prisma SASE Provider
pub struct SaseProvider {
    client: SaseClient,
}

impl SaseProvider {
    pub fn new(client: SaseClient) -> Self {
        Self { client }
    }

    /// Authenticate with resolved settings
    pub async fn from_config(config: &ClientConfig) -> ProviderResult<Self> {
        let client = SaseClient::connect(config).await?;
        Ok(Self::new(client))
    }

    /// Configure from a provider block, falling back to the environment and auth file
    pub async fn configure(block: &Attributes) -> ProviderResult<Self> {
        let explicit = ProviderConfig::from_attributes(block).map_err(config_error)?;
        let config = ProviderConfig::load(explicit).map_err(config_error)?;
        tracing::debug!(base_url = %config.base_url, "configuring provider");
        Self::from_config(&config).await
    }

    pub fn client(&self) -> &SaseClient {
        &self.client
    }
}

fn config_error(err: ConfigError) -> ProviderError {
    ProviderError::invalid_config("Invalid provider configuration").with_cause(err)
}

impl Provider for SaseProvider {
    fn name(&self) -> &'static str {
        "sase"
    }

    fn schema(&self) -> ResourceSchema {
        schemas::provider_schema()
    }

    fn resources(&self) -> Vec<Box<dyn Resource>> {
        resources::resources(&self.client)
    }

    fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        resources::data_sources(&self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sase_core::lifecycle::ProviderServer;
    use sase_core::provider::ErrorKind;
    use sase_core::resource::Value;

    fn provider() -> SaseProvider {
        SaseProvider::new(SaseClient::with_base_url("token", "http://localhost").unwrap())
    }

    #[test]
    fn schemas_cover_every_type() {
        let schemas = ProviderServer::new(provider()).schemas();
        assert_eq!(schemas.resources.len(), 12);
        assert_eq!(schemas.data_sources.len(), 22);
        assert!(schemas.provider.attributes.contains_key("client_secret"));
    }

    #[test]
    fn invalid_config_is_rejected_before_planning() {
        let server = ProviderServer::new(provider());
        let config: Attributes = [
            ("name".to_string(), Value::from("web")),
            ("folder".to_string(), Value::from("Nowhere")),
            ("fqdn".to_string(), Value::from("example.com")),
            ("ip_netmask".to_string(), Value::from("10.0.0.0/24")),
        ]
        .into_iter()
        .collect();
        let response = server.plan_resource_change("sase_addresses", &config, None);
        assert!(response.plan.is_none());
        assert!(response.diagnostics.len() >= 2);
    }

    #[tokio::test]
    async fn bad_logging_category_is_a_config_error() {
        let block: Attributes = [(
            "logging".to_string(),
            Value::List(vec![Value::from("verbose")]),
        )]
        .into_iter()
        .collect();
        let err = match SaseProvider::configure(&block).await {
            Err(err) => err,
            Ok(_) => panic!("expected configuration to fail"),
        };
        assert_eq!(err.kind, ErrorKind::InvalidConfig);
    }
}
