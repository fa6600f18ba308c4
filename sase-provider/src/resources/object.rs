//! Resources and data sources for objects with a server-assigned UUID
//!
//! Every folder-scoped and position-scoped object shares the same lifecycle:
//! create returns the object with its UUID, and the composite ID built from
//! folder (and position) plus that UUID is all later calls need.

use std::marker::PhantomData;

use sase_core::id::IdTokens;
use sase_core::provider::{
    BoxFuture, DataSource, ErrorKind, ProviderError, ProviderResult, Resource, required_str,
};
use sase_core::resource::{Attributes, State, Value};
use sase_core::schema::ResourceSchema;

use crate::client::{
    ApiObject, CreateInput, DeleteInput, ListInput, ReadInput, SaseClient, Service, UpdateInput,
};
use crate::mapper;
use crate::schemas::{self, FOLDER_ID, SaseSchemaConfig};

/// Managed object identified by `folder:object_id` or `position:folder:object_id`
pub struct ObjectResource<M> {
    client: SaseClient,
    config: SaseSchemaConfig,
    _model: PhantomData<fn() -> M>,
}

impl<M: ApiObject> ObjectResource<M> {
    pub fn new(client: SaseClient, config: SaseSchemaConfig) -> Self {
        Self {
            client,
            config,
            _model: PhantomData,
        }
    }

    fn fail(&self, err: impl Into<ProviderError>) -> ProviderError {
        err.into().for_resource(self.config.type_name)
    }

    fn decode_id(&self, state: &State) -> ProviderResult<(IdTokens, String)> {
        let id = state.id().ok_or_else(|| {
            self.fail(ProviderError::new(ErrorKind::InvalidId, "Resource has no ID"))
        })?;
        let tokens = self
            .config
            .scope
            .id_format()
            .decode(id)
            .map_err(|e| self.fail(e))?;
        let object_id = tokens.require("object_id").map_err(|e| self.fail(e))?.to_string();
        Ok((tokens, object_id))
    }

    /// State from an API object plus the identifying attributes the API does not return
    fn to_state(
        &self,
        schema: &ResourceSchema,
        model: &M,
        identifying: &Attributes,
    ) -> ProviderResult<State> {
        if model.object_id().is_none() {
            return Err(self.fail(ProviderError::mapping("API response has no object id")));
        }
        let mut attributes = mapper::from_model(schema, model).map_err(|e| self.fail(e))?;
        for name in ["folder", "position"] {
            if let Some(value) = identifying.get(name) {
                attributes.insert(name.to_string(), value.clone());
            }
        }
        let id = self.config.scope.id_format().encode(&attributes);
        Ok(State::existing(self.config.type_name, attributes).with_identifier(id))
    }
}

impl<M: ApiObject> Resource for ObjectResource<M> {
    fn type_name(&self) -> &'static str {
        self.config.type_name
    }

    fn schema(&self) -> ResourceSchema {
        schemas::resource_schema(&self.config)
    }

    fn create<'a>(&'a self, planned: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let schema = self.schema();
            let request: M = mapper::to_model(&schema, planned).map_err(|e| self.fail(e))?;
            let input = CreateInput {
                folder: optional_string(planned, "folder"),
                position: optional_string(planned, "position"),
                request,
            };
            let created = Service::<M>::new(&self.client)
                .create(&input)
                .await
                .map_err(|e| self.fail(e))?;
            self.to_state(&schema, &created, planned)
        })
    }

    fn read<'a>(&'a self, current: &'a State) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let (tokens, object_id) = self.decode_id(current)?;
            let input = ReadInput {
                object_id,
                folder: tokens.get("folder").map(str::to_string),
            };
            match Service::<M>::new(&self.client).read(&input).await {
                Ok(model) => {
                    let mut identifying = Attributes::new();
                    tokens.write_into(&mut identifying);
                    self.to_state(&self.schema(), &model, &identifying)
                }
                Err(e) if e.is_object_not_found() => Ok(State::not_found(self.config.type_name)),
                Err(e) => Err(self.fail(e)),
            }
        })
    }

    fn update<'a>(
        &'a self,
        prior: &'a State,
        planned: &'a Attributes,
    ) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let (tokens, object_id) = self.decode_id(prior)?;
            let schema = self.schema();
            let request: M = mapper::to_model(&schema, planned).map_err(|e| self.fail(e))?;
            let updated = Service::<M>::new(&self.client)
                .update(&UpdateInput { object_id, request })
                .await
                .map_err(|e| self.fail(e))?;
            let mut identifying = Attributes::new();
            tokens.write_into(&mut identifying);
            self.to_state(&schema, &updated, &identifying)
        })
    }

    fn delete<'a>(&'a self, prior: &'a State) -> BoxFuture<'a, ProviderResult<()>> {
        Box::pin(async move {
            let (_, object_id) = self.decode_id(prior)?;
            match Service::<M>::new(&self.client)
                .delete(&DeleteInput { object_id })
                .await
            {
                Ok(()) => Ok(()),
                Err(e) if e.is_object_not_found() => {
                    tracing::debug!(resource_type = self.config.type_name, "object already deleted");
                    Ok(())
                }
                Err(e) => Err(self.fail(e)),
            }
        })
    }
}

/// Data source that reads one object by UUID
pub struct ObjectDataSource<M> {
    client: SaseClient,
    config: SaseSchemaConfig,
    _model: PhantomData<fn() -> M>,
}

impl<M: ApiObject> ObjectDataSource<M> {
    pub fn new(client: SaseClient, config: SaseSchemaConfig) -> Self {
        Self {
            client,
            config,
            _model: PhantomData,
        }
    }
}

impl<M: ApiObject> DataSource for ObjectDataSource<M> {
    fn type_name(&self) -> &'static str {
        self.config.type_name
    }

    fn schema(&self) -> ResourceSchema {
        schemas::data_source_schema(&self.config)
    }

    fn read<'a>(&'a self, config: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let fail = |e: ProviderError| e.for_resource(self.config.type_name);
            let object_id = required_str(config, "object_id").map_err(fail)?;
            let input = ReadInput {
                object_id: object_id.to_string(),
                folder: optional_string(config, "folder"),
            };
            let model = Service::<M>::new(&self.client)
                .read(&input)
                .await
                .map_err(|e| fail(e.into()))?;

            let mut attributes =
                mapper::from_model(&self.schema(), &model).map_err(|e| fail(e.into()))?;
            attributes.insert("object_id".to_string(), Value::from(object_id));
            if let Some(folder) = config.get("folder") {
                attributes.insert("folder".to_string(), folder.clone());
            }
            let id = FOLDER_ID.encode(&attributes);
            Ok(State::existing(self.config.type_name, attributes).with_identifier(id))
        })
    }
}

/// Data source that lists objects, one page per read
pub struct ObjectListDataSource<M> {
    client: SaseClient,
    config: SaseSchemaConfig,
    _model: PhantomData<fn() -> M>,
}

impl<M: ApiObject> ObjectListDataSource<M> {
    pub fn new(client: SaseClient, config: SaseSchemaConfig) -> Self {
        Self {
            client,
            config,
            _model: PhantomData,
        }
    }
}

impl<M: ApiObject> DataSource for ObjectListDataSource<M> {
    fn type_name(&self) -> &'static str {
        self.config.list_type_name
    }

    fn schema(&self) -> ResourceSchema {
        schemas::list_data_source_schema(&self.config)
    }

    fn read<'a>(&'a self, config: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let fail = |e: ProviderError| e.for_resource(self.config.list_type_name);
            let input = list_input(config);
            let page = Service::<M>::new(&self.client)
                .list(&input)
                .await
                .map_err(|e| fail(e.into()))?;

            let item_schema = schemas::list_item_schema(&self.config);
            let data = page
                .data
                .iter()
                .map(|model| mapper::from_model(&item_schema, model).map(Value::Map))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| fail(e.into()))?;

            let state = list_state(self.config.list_type_name, &self.config, config, data, page.total);
            Ok(state)
        })
    }
}

/// List filters from a (defaulted) list data source configuration
pub(crate) fn list_input(config: &Attributes) -> ListInput {
    ListInput {
        limit: config.get("limit").and_then(Value::as_int),
        offset: config.get("offset").and_then(Value::as_int),
        name: optional_string(config, "name"),
        folder: optional_string(config, "folder"),
        position: optional_string(config, "position"),
    }
}

/// State of a list data source: the configuration plus `data` and `total`
pub(crate) fn list_state(
    type_name: &'static str,
    schema_config: &SaseSchemaConfig,
    config: &Attributes,
    data: Vec<Value>,
    total: i64,
) -> State {
    let mut attributes = config.clone();
    attributes.insert("data".to_string(), Value::List(data));
    attributes.insert("total".to_string(), Value::Int(total));
    let id = schema_config.scope.list_id_format().encode(&attributes);
    State::existing(type_name, attributes).with_identifier(id)
}

pub(crate) fn optional_string(attributes: &Attributes, name: &str) -> Option<String> {
    attributes
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, AppOverrideRule};
    use crate::schemas::generated::{addresses, app_override_rules};
    use sase_core::lifecycle::ProviderServer;
    use sase_core::provider::Provider;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn attrs(pairs: Vec<(&str, Value)>) -> Attributes {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn address_resource(server: &MockServer) -> ObjectResource<Address> {
        let client = SaseClient::with_base_url("token", server.uri()).unwrap();
        ObjectResource::new(client, addresses::addresses_config())
    }

    fn not_found() -> ResponseTemplate {
        ResponseTemplate::new(404).set_body_json(json!({
            "_errors": [{"code": "E005", "message": "Object Not Found", "details": {}}],
            "_request_id": "req-1"
        }))
    }

    /// Provider with just the address resource, for lifecycle tests
    struct AddressProvider {
        base_url: String,
    }

    impl Provider for AddressProvider {
        fn name(&self) -> &'static str {
            "sase"
        }

        fn schema(&self) -> ResourceSchema {
            schemas::provider_schema()
        }

        fn resources(&self) -> Vec<Box<dyn Resource>> {
            let client = SaseClient::with_base_url("token", self.base_url.clone()).unwrap();
            vec![Box::new(ObjectResource::<Address>::new(
                client,
                addresses::addresses_config(),
            ))]
        }

        fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
            Vec::new()
        }
    }

    fn server_for(server: &MockServer) -> ProviderServer {
        ProviderServer::new(AddressProvider {
            base_url: server.uri(),
        })
    }

    fn prior_state() -> State {
        State::existing(
            "sase_addresses",
            attrs(vec![
                ("name", Value::from("web")),
                ("folder", Value::from("Shared")),
                ("object_id", Value::from("abc-123")),
                ("ip_netmask", Value::from("10.0.0.0/24")),
            ]),
        )
        .with_identifier("Shared:abc-123")
    }

    #[tokio::test]
    async fn create_builds_folder_scoped_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sse/config/v1/addresses"))
            .and(query_param("folder", "Shared"))
            .and(body_json(json!({"name": "web", "ip_netmask": "10.0.0.0/24"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "abc-123",
                "name": "web",
                "folder": "Shared",
                "ip_netmask": "10.0.0.0/24"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let planned = attrs(vec![
            ("name", Value::from("web")),
            ("folder", Value::from("Shared")),
            ("ip_netmask", Value::from("10.0.0.0/24")),
        ]);
        let state = address_resource(&server).create(&planned).await.unwrap();
        assert_eq!(state.id(), Some("Shared:abc-123"));
        assert_eq!(state.attribute("object_id"), Some(&Value::from("abc-123")));
        assert_eq!(state.attribute("folder"), Some(&Value::from("Shared")));
    }

    #[tokio::test]
    async fn read_uses_id_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sse/config/v1/addresses/abc-123"))
            .and(query_param("folder", "Shared"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc-123",
                "name": "web",
                "fqdn": "www.example.com"
            })))
            .mount(&server)
            .await;

        let state = address_resource(&server).read(&prior_state()).await.unwrap();
        assert!(state.exists);
        assert_eq!(state.attribute("fqdn"), Some(&Value::from("www.example.com")));
        assert_eq!(state.attribute("ip_netmask"), None);
        assert_eq!(state.attribute("folder"), Some(&Value::from("Shared")));
    }

    #[tokio::test]
    async fn read_of_missing_object_removes_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(not_found())
            .mount(&server)
            .await;

        let response = server_for(&server)
            .read_resource("sase_addresses", &prior_state()).await;
        assert!(response.new_state.is_none());
        assert!(!response.diagnostics.has_error());
    }

    #[tokio::test]
    async fn delete_of_missing_object_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/sse/config/v1/addresses/abc-123"))
            .respond_with(not_found())
            .expect(1)
            .mount(&server)
            .await;

        let diagnostics = server_for(&server)
            .apply_delete("sase_addresses", &prior_state()).await;
        assert!(!diagnostics.has_error());
    }

    #[tokio::test]
    async fn other_errors_keep_prior_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "_errors": [{"code": "E003", "message": "Internal error", "details": {}}],
                "_request_id": "req-2"
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "_errors": [{"code": "E006", "message": "Reference in use", "details": {}}]
            })))
            .mount(&server)
            .await;

        let provider = server_for(&server);
        let response = provider
            .read_resource("sase_addresses", &prior_state()).await;
        assert!(response.diagnostics.has_error());
        assert_eq!(response.new_state, Some(prior_state()));
        let summary = &response.diagnostics.errors().next().unwrap().summary;
        assert_eq!(summary, "Error in API call");

        let diagnostics = provider
            .apply_delete("sase_addresses", &prior_state()).await;
        assert!(diagnostics.has_error());
    }

    #[tokio::test]
    async fn malformed_id_is_a_parse_error() {
        let server = MockServer::start().await;
        let state = prior_state().with_identifier("Shared");
        let err = address_resource(&server).read(&state).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidId);
        assert!(err.detail().contains("Expected 2 tokens"));
    }

    #[tokio::test]
    async fn update_puts_to_object_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/sse/config/v1/addresses/abc-123"))
            .and(body_json(json!({"name": "web", "ip_netmask": "10.0.1.0/24"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc-123",
                "name": "web",
                "ip_netmask": "10.0.1.0/24"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let planned = attrs(vec![
            ("name", Value::from("web")),
            ("folder", Value::from("Shared")),
            ("ip_netmask", Value::from("10.0.1.0/24")),
        ]);
        let state = address_resource(&server)
            .update(&prior_state(), &planned)
            .await
            .unwrap();
        assert_eq!(state.id(), Some("Shared:abc-123"));
        assert_eq!(state.attribute("ip_netmask"), Some(&Value::from("10.0.1.0/24")));
    }

    #[tokio::test]
    async fn position_scoped_rule_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sse/config/v1/app-override-rules"))
            .and(query_param("folder", "Shared"))
            .and(query_param("position", "pre"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "rule-1",
                "name": "override-8080",
                "application": "web-browsing",
                "port": "8080",
                "protocol": "tcp",
                "from": ["trust"],
                "to": ["untrust"],
                "source": ["any"],
                "destination": ["any"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SaseClient::with_base_url("token", server.uri()).unwrap();
        let resource = ObjectResource::<AppOverrideRule>::new(
            client,
            app_override_rules::app_override_rules_config(),
        );
        let any = || Value::List(vec![Value::from("any")]);
        let planned = attrs(vec![
            ("name", Value::from("override-8080")),
            ("folder", Value::from("Shared")),
            ("position", Value::from("pre")),
            ("application", Value::from("web-browsing")),
            ("port", Value::from("8080")),
            ("protocol", Value::from("tcp")),
            ("from", Value::List(vec![Value::from("trust")])),
            ("to", Value::List(vec![Value::from("untrust")])),
            ("source", any()),
            ("destination", any()),
        ]);
        let state = resource.create(&planned).await.unwrap();
        assert_eq!(state.id(), Some("pre:Shared:rule-1"));
    }

    #[tokio::test]
    async fn list_data_source_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sse/config/v1/addresses"))
            .and(query_param("limit", "200"))
            .and(query_param("offset", "0"))
            .and(query_param("folder", "Shared"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "a1", "name": "web", "ip_netmask": "10.0.0.0/24"},
                    {"id": "a2", "name": "site", "fqdn": "example.com"}
                ],
                "limit": 200,
                "offset": 0,
                "total": 2
            })))
            .mount(&server)
            .await;

        let client = SaseClient::with_base_url("token", server.uri()).unwrap();
        let list = ObjectListDataSource::<Address>::new(client, addresses::addresses_config());
        let config = attrs(vec![
            ("limit", Value::Int(200)),
            ("offset", Value::Int(0)),
            ("folder", Value::from("Shared")),
        ]);
        let state = list.read(&config).await.unwrap();
        assert_eq!(state.id(), Some("200:0::Shared"));
        assert_eq!(state.attribute("total"), Some(&Value::Int(2)));
        let data = state.attribute("data").and_then(Value::as_list).unwrap();
        assert_eq!(data[1].as_map().unwrap()["object_id"], Value::from("a2"));
    }

    #[tokio::test]
    async fn single_data_source_reads_by_uuid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sse/config/v1/addresses/a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "a1", "name": "web", "ip_netmask": "10.0.0.0/24", "tag": ["prod"]
            })))
            .mount(&server)
            .await;

        let client = SaseClient::with_base_url("token", server.uri()).unwrap();
        let source = ObjectDataSource::<Address>::new(client, addresses::addresses_config());
        let state = source
            .read(&attrs(vec![("object_id", Value::from("a1"))]))
            .await
            .unwrap();
        assert_eq!(state.id(), Some(":a1"));
        assert_eq!(
            state.attribute("tag"),
            Some(&Value::List(vec![Value::from("prod")]))
        );
    }
}
