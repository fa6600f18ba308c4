//! BGP routing, a tenant-wide singleton
//!
//! There is nothing to create or delete remotely. Create and update both
//! replace the settings, and delete only forgets them.

use reqwest::Method;
use sase_core::provider::{BoxFuture, DataSource, ProviderError, ProviderResult, Resource};
use sase_core::resource::{Attributes, State};
use sase_core::schema::ResourceSchema;

use crate::client::SaseClient;
use crate::client::service::to_body;
use crate::mapper;
use crate::models::BgpRouting;
use crate::models::bgp_routing::PATH;
use crate::schemas::generated::bgp_routing::bgp_routing_config;
use crate::schemas::{self, SaseSchemaConfig};

/// The only ID a BGP routing resource can have
pub const BGP_ROUTING_ID: &str = "bgp_routing";

async fn get(client: &SaseClient) -> Result<BgpRouting, crate::client::ApiError> {
    client.execute(Method::GET, PATH, &[], None).await
}

fn to_state(
    type_name: &'static str,
    schema: &ResourceSchema,
    routing: &BgpRouting,
) -> ProviderResult<State> {
    let attributes =
        mapper::from_model(schema, routing).map_err(|e| ProviderError::from(e).for_resource(type_name))?;
    Ok(State::existing(type_name, attributes).with_identifier(BGP_ROUTING_ID))
}

pub struct BgpRoutingResource {
    client: SaseClient,
    config: SaseSchemaConfig,
}

impl BgpRoutingResource {
    pub fn new(client: SaseClient) -> Self {
        Self {
            client,
            config: bgp_routing_config(),
        }
    }

    async fn put(&self, planned: &Attributes) -> ProviderResult<State> {
        let fail = |e: ProviderError| e.for_resource(self.config.type_name);
        let schema = self.schema();
        let routing: BgpRouting = mapper::to_model(&schema, planned).map_err(|e| fail(e.into()))?;
        let body = to_body(&routing).map_err(|e| fail(e.into()))?;
        let updated: BgpRouting = self
            .client
            .execute(Method::PUT, PATH, &[], Some(&body))
            .await
            .map_err(|e| fail(e.into()))?;
        to_state(self.config.type_name, &schema, &updated)
    }
}

impl Resource for BgpRoutingResource {
    fn type_name(&self) -> &'static str {
        self.config.type_name
    }

    fn schema(&self) -> ResourceSchema {
        self.config.schema.clone().attribute(schemas::id_attribute())
    }

    fn create<'a>(&'a self, planned: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(self.put(planned))
    }

    fn read<'a>(&'a self, _current: &'a State) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let routing = get(&self.client)
                .await
                .map_err(|e| ProviderError::from(e).for_resource(self.config.type_name))?;
            to_state(self.config.type_name, &self.schema(), &routing)
        })
    }

    fn update<'a>(
        &'a self,
        _prior: &'a State,
        planned: &'a Attributes,
    ) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(self.put(planned))
    }

    fn delete<'a>(&'a self, _prior: &'a State) -> BoxFuture<'a, ProviderResult<()>> {
        Box::pin(async move {
            tracing::info!(
                resource_type = self.config.type_name,
                "BGP routing cannot be deleted, removing it from state only"
            );
            Ok(())
        })
    }
}

/// Current BGP routing settings
pub struct BgpRoutingDataSource {
    client: SaseClient,
    config: SaseSchemaConfig,
}

impl BgpRoutingDataSource {
    pub fn new(client: SaseClient) -> Self {
        Self {
            client,
            config: bgp_routing_config(),
        }
    }
}

impl DataSource for BgpRoutingDataSource {
    fn type_name(&self) -> &'static str {
        self.config.type_name
    }

    fn schema(&self) -> ResourceSchema {
        self.config
            .schema
            .clone()
            .into_computed()
            .attribute(schemas::id_attribute())
    }

    fn read<'a>(&'a self, _config: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let routing = get(&self.client)
                .await
                .map_err(|e| ProviderError::from(e).for_resource(self.config.type_name))?;
            to_state(self.config.type_name, &self.schema(), &routing)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sase_core::resource::Value;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> SaseClient {
        SaseClient::with_base_url("token", server.uri()).unwrap()
    }

    #[tokio::test]
    async fn create_puts_singleton() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/sse/config/v1/bgp-routing"))
            .and(body_json(json!({
                "routing_preference": {"hot_potato_routing": {}},
                "accept_route_over_SC": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routing_preference": {"hot_potato_routing": {}},
                "accept_route_over_SC": true,
                "backbone_routing": "no-asymmetric-routing"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let routing_preference: Attributes =
            [("hot_potato_routing".to_string(), Value::Bool(true))].into_iter().collect();
        let planned: Attributes = [
            ("routing_preference".to_string(), Value::Map(routing_preference)),
            ("accept_route_over_sc".to_string(), Value::Bool(true)),
        ]
        .into_iter()
        .collect();

        let state = BgpRoutingResource::new(client(&server))
            .create(&planned)
            .await
            .unwrap();
        assert_eq!(state.id(), Some(BGP_ROUTING_ID));
        assert_eq!(state.attribute("accept_route_over_sc"), Some(&Value::Bool(true)));
        assert_eq!(
            state.attribute("backbone_routing"),
            Some(&Value::from("no-asymmetric-routing"))
        );
    }

    #[tokio::test]
    async fn delete_leaves_remote_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let prior = State::existing("sase_bgp_routing", Attributes::new())
            .with_identifier(BGP_ROUTING_ID);
        BgpRoutingResource::new(client(&server))
            .delete(&prior)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn data_source_reads_current_settings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sse/config/v1/bgp-routing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routing_preference": {"default": {}},
                "withdraw_static_route": false
            })))
            .mount(&server)
            .await;

        let state = BgpRoutingDataSource::new(client(&server))
            .read(&Attributes::new())
            .await
            .unwrap();
        let preference = state
            .attribute("routing_preference")
            .and_then(Value::as_map)
            .unwrap();
        assert_eq!(preference.get("default"), Some(&Value::Bool(true)));
        assert_eq!(state.attribute("withdraw_static_route"), Some(&Value::Bool(false)));
    }
}
