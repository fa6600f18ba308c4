//! Lifecycle - Drive resources and data sources through their operations
//!
//! The server validates configurations, plans changes and runs provider
//! operations, turning every failure into diagnostics. State is never
//! partially updated: when an operation fails the prior state is kept.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::plan::{self, Plan};
use crate::provider::{DataSource, Provider, ProviderError, Resource};
use crate::resource::{Attributes, State};
use crate::schema::ResourceSchema;

/// Outcome of an operation that yields state
#[derive(Debug, Default)]
pub struct StateResponse {
    /// `None` means the object is not (or no longer) tracked
    pub new_state: Option<State>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Default)]
pub struct PlanResponse {
    pub plan: Option<Plan>,
    pub diagnostics: Diagnostics,
}

/// Every schema a provider exposes
#[derive(Debug, Serialize)]
pub struct ProviderSchemas {
    pub provider: ResourceSchema,
    pub resources: BTreeMap<String, ResourceSchema>,
    pub data_sources: BTreeMap<String, ResourceSchema>,
}

/// Registry of a provider's resources and data sources
pub struct ProviderServer {
    name: &'static str,
    provider_schema: ResourceSchema,
    resources: HashMap<&'static str, Box<dyn Resource>>,
    data_sources: HashMap<&'static str, Box<dyn DataSource>>,
}

impl ProviderServer {
    pub fn new<P: Provider>(provider: P) -> Self {
        Self {
            name: provider.name(),
            provider_schema: provider.schema(),
            resources: provider
                .resources()
                .into_iter()
                .map(|r| (r.type_name(), r))
                .collect(),
            data_sources: provider
                .data_sources()
                .into_iter()
                .map(|d| (d.type_name(), d))
                .collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn schemas(&self) -> ProviderSchemas {
        ProviderSchemas {
            provider: self.provider_schema.clone(),
            resources: self
                .resources
                .iter()
                .map(|(name, r)| (name.to_string(), r.schema()))
                .collect(),
            data_sources: self
                .data_sources
                .iter()
                .map(|(name, d)| (name.to_string(), d.schema()))
                .collect(),
        }
    }

    pub fn resource_schema(&self, type_name: &str) -> Option<ResourceSchema> {
        self.resources.get(type_name).map(|r| r.schema())
    }

    pub fn data_source_schema(&self, type_name: &str) -> Option<ResourceSchema> {
        self.data_sources.get(type_name).map(|d| d.schema())
    }

    fn resource(&self, type_name: &str, diagnostics: &mut Diagnostics) -> Option<&dyn Resource> {
        let resource = self.resources.get(type_name).map(|r| r.as_ref());
        if resource.is_none() {
            diagnostics.add_error(
                "Unknown resource type",
                format!("Provider '{}' has no resource type '{}'", self.name, type_name),
            );
        }
        resource
    }

    pub fn validate_resource_config(&self, type_name: &str, config: &Attributes) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if let Some(resource) = self.resource(type_name, &mut diagnostics) {
            validate_config(&resource.schema(), config, &mut diagnostics);
        }
        diagnostics
    }

    pub fn plan_resource_change(
        &self,
        type_name: &str,
        config: &Attributes,
        prior: Option<&State>,
    ) -> PlanResponse {
        let mut response = PlanResponse::default();
        let Some(resource) = self.resource(type_name, &mut response.diagnostics) else {
            return response;
        };
        let schema = resource.schema();
        validate_config(&schema, config, &mut response.diagnostics);
        if !response.diagnostics.has_error() {
            response.plan = Some(plan::plan_resource(&schema, config, prior));
        }
        response
    }

    pub async fn apply_create(&self, type_name: &str, planned: &Attributes) -> StateResponse {
        let mut response = StateResponse::default();
        let Some(resource) = self.resource(type_name, &mut response.diagnostics) else {
            return response;
        };
        tracing::debug!(resource_type = type_name, "creating resource");
        match resource.create(planned).await {
            Ok(state) => response.new_state = Some(state),
            Err(e) => add_provider_error(&mut response.diagnostics, &e),
        }
        response
    }

    /// Refresh a resource. A vanished object drops out of state without an error.
    pub async fn read_resource(&self, type_name: &str, current: &State) -> StateResponse {
        let mut response = StateResponse::default();
        let Some(resource) = self.resource(type_name, &mut response.diagnostics) else {
            response.new_state = Some(current.clone());
            return response;
        };
        match resource.read(current).await {
            Ok(state) if state.exists => response.new_state = Some(state),
            Ok(_) => {
                tracing::warn!(
                    resource_type = type_name,
                    id = current.id().unwrap_or_default(),
                    "remote object not found, removing from state"
                );
            }
            Err(e) => {
                add_provider_error(&mut response.diagnostics, &e);
                response.new_state = Some(current.clone());
            }
        }
        response
    }

    pub async fn apply_update(
        &self,
        type_name: &str,
        prior: &State,
        planned: &Attributes,
    ) -> StateResponse {
        let mut response = StateResponse::default();
        let Some(resource) = self.resource(type_name, &mut response.diagnostics) else {
            response.new_state = Some(prior.clone());
            return response;
        };
        tracing::debug!(
            resource_type = type_name,
            id = prior.id().unwrap_or_default(),
            "updating resource"
        );
        match resource.update(prior, planned).await {
            Ok(state) => response.new_state = Some(state),
            Err(e) => {
                add_provider_error(&mut response.diagnostics, &e);
                response.new_state = Some(prior.clone());
            }
        }
        response
    }

    pub async fn apply_delete(&self, type_name: &str, prior: &State) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let Some(resource) = self.resource(type_name, &mut diagnostics) else {
            return diagnostics;
        };
        tracing::debug!(
            resource_type = type_name,
            id = prior.id().unwrap_or_default(),
            "deleting resource"
        );
        if let Err(e) = resource.delete(prior).await {
            add_provider_error(&mut diagnostics, &e);
        }
        diagnostics
    }

    /// Import an existing object by ID, then read it
    pub async fn import_resource(&self, type_name: &str, id: &str) -> StateResponse {
        let mut response = StateResponse::default();
        let Some(resource) = self.resource(type_name, &mut response.diagnostics) else {
            return response;
        };
        let imported = match resource.import_state(id) {
            Ok(state) => state,
            Err(e) => {
                add_provider_error(&mut response.diagnostics, &e);
                return response;
            }
        };
        match resource.read(&imported).await {
            Ok(state) if state.exists => response.new_state = Some(state),
            Ok(_) => response.diagnostics.add_error(
                "Cannot import non-existent remote object",
                format!("No {} exists with ID '{}'", type_name, id),
            ),
            Err(e) => add_provider_error(&mut response.diagnostics, &e),
        }
        response
    }

    pub async fn read_data_source(&self, type_name: &str, config: &Attributes) -> StateResponse {
        let mut response = StateResponse::default();
        let Some(data_source) = self.data_sources.get(type_name) else {
            response.diagnostics.add_error(
                "Unknown data source",
                format!("Provider '{}' has no data source '{}'", self.name, type_name),
            );
            return response;
        };
        let schema = data_source.schema();
        validate_config(&schema, config, &mut response.diagnostics);
        if response.diagnostics.has_error() {
            return response;
        }

        let mut config = config.clone();
        plan::apply_defaults(schema.attributes.values(), &mut config);
        match data_source.read(&config).await {
            Ok(state) => response.new_state = Some(state),
            Err(e) => add_provider_error(&mut response.diagnostics, &e),
        }
        response
    }
}

fn validate_config(schema: &ResourceSchema, config: &Attributes, diagnostics: &mut Diagnostics) {
    if let Err(errors) = schema.validate(config) {
        for error in errors {
            match error.attribute() {
                Some(attr) => {
                    diagnostics.add_attribute_error(attr, "Invalid attribute", error.to_string())
                }
                None => diagnostics.add_error("Invalid attribute", error.to_string()),
            }
        }
    }
}

fn add_provider_error(diagnostics: &mut Diagnostics, err: &ProviderError) {
    diagnostics.add_error(err.kind.summary(), err.detail());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{BoxFuture, ProviderResult};
    use crate::resource::Value;
    use crate::schema::{AttributeSchema, AttributeType};

    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed,
        NotFound,
        Fail,
    }

    struct MockResource(Behavior);

    impl MockResource {
        fn outcome(&self, attrs: &Attributes) -> ProviderResult<State> {
            match self.0 {
                Behavior::Succeed => {
                    Ok(State::existing("mock_object", attrs.clone()).with_identifier("Shared:1"))
                }
                Behavior::NotFound => Ok(State::not_found("mock_object")),
                Behavior::Fail => Err(ProviderError::api("status 500: internal error")
                    .for_resource("mock_object")),
            }
        }
    }

    impl Resource for MockResource {
        fn type_name(&self) -> &'static str {
            "mock_object"
        }

        fn schema(&self) -> ResourceSchema {
            ResourceSchema::new("mock_object")
                .attribute(AttributeSchema::new("id", AttributeType::String).computed())
                .attribute(AttributeSchema::new("name", AttributeType::String).required())
        }

        fn create<'a>(&'a self, planned: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async move { self.outcome(planned) })
        }

        fn read<'a>(&'a self, current: &'a State) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async move { self.outcome(&current.attributes) })
        }

        fn update<'a>(
            &'a self,
            _prior: &'a State,
            planned: &'a Attributes,
        ) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async move { self.outcome(planned) })
        }

        fn delete<'a>(&'a self, _prior: &'a State) -> BoxFuture<'a, ProviderResult<()>> {
            Box::pin(async move { self.outcome(&Attributes::new()).map(|_| ()) })
        }
    }

    struct MockList;

    impl DataSource for MockList {
        fn type_name(&self) -> &'static str {
            "mock_object_list"
        }

        fn schema(&self) -> ResourceSchema {
            ResourceSchema::new("mock_object_list")
                .attribute(AttributeSchema::new("limit", AttributeType::Int).with_default(200))
        }

        fn read<'a>(&'a self, config: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async move { Ok(State::existing("mock_object_list", config.clone())) })
        }
    }

    struct MockProvider(Behavior);

    impl Provider for MockProvider {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn schema(&self) -> ResourceSchema {
            ResourceSchema::new("mock")
        }

        fn resources(&self) -> Vec<Box<dyn Resource>> {
            vec![Box::new(MockResource(self.0))]
        }

        fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
            vec![Box::new(MockList)]
        }
    }

    fn server(behavior: Behavior) -> ProviderServer {
        ProviderServer::new(MockProvider(behavior))
    }

    fn prior() -> State {
        State::existing(
            "mock_object",
            Attributes::from([("name".to_string(), Value::from("old"))]),
        )
        .with_identifier("Shared:1")
    }

    fn config() -> Attributes {
        Attributes::from([("name".to_string(), Value::from("new"))])
    }

    #[tokio::test]
    async fn create_returns_state() {
        let response = server(Behavior::Succeed).apply_create("mock_object", &config()).await;
        assert!(response.diagnostics.is_empty());
        assert_eq!(response.new_state.unwrap().id(), Some("Shared:1"));
    }

    #[tokio::test]
    async fn create_failure_leaves_no_state() {
        let response = server(Behavior::Fail).apply_create("mock_object", &config()).await;
        assert!(response.new_state.is_none());
        let error = response.diagnostics.errors().next().unwrap();
        assert_eq!(error.summary, "Error in API call");
        assert!(error.detail.contains("status 500"));
    }

    #[tokio::test]
    async fn read_not_found_removes_state_without_error() {
        let response = server(Behavior::NotFound).read_resource("mock_object", &prior()).await;
        assert!(response.new_state.is_none());
        assert!(!response.diagnostics.has_error());
    }

    #[tokio::test]
    async fn read_failure_keeps_prior_state() {
        let response = server(Behavior::Fail).read_resource("mock_object", &prior()).await;
        assert!(response.diagnostics.has_error());
        assert_eq!(response.new_state, Some(prior()));
    }

    #[tokio::test]
    async fn update_failure_keeps_prior_state() {
        let response = server(Behavior::Fail)
            .apply_update("mock_object", &prior(), &config())
            .await;
        assert!(response.diagnostics.has_error());
        assert_eq!(response.new_state, Some(prior()));
    }

    #[tokio::test]
    async fn delete_failure_is_reported() {
        assert!(server(Behavior::Succeed).apply_delete("mock_object", &prior()).await.is_empty());
        assert!(server(Behavior::Fail).apply_delete("mock_object", &prior()).await.has_error());
    }

    #[tokio::test]
    async fn import_of_missing_object_fails() {
        let response = server(Behavior::NotFound).import_resource("mock_object", "Shared:1").await;
        assert!(response.new_state.is_none());
        assert_eq!(
            response.diagnostics.errors().next().unwrap().summary,
            "Cannot import non-existent remote object"
        );
    }

    #[test]
    fn plan_reports_invalid_config() {
        let response =
            server(Behavior::Succeed).plan_resource_change("mock_object", &Attributes::new(), None);
        assert!(response.plan.is_none());
        let error = response.diagnostics.errors().next().unwrap();
        assert_eq!(error.attribute.as_deref(), Some("name"));
    }

    #[test]
    fn unknown_resource_type() {
        let diags = server(Behavior::Succeed).validate_resource_config("mock_other", &config());
        assert_eq!(diags.errors().next().unwrap().summary, "Unknown resource type");
    }

    #[tokio::test]
    async fn data_source_defaults_are_applied() {
        let response = server(Behavior::Succeed)
            .read_data_source("mock_object_list", &Attributes::new())
            .await;
        let state = response.new_state.unwrap();
        assert_eq!(state.attribute("limit"), Some(&Value::Int(200)));
    }

    #[test]
    fn schemas_cover_resources_and_data_sources() {
        let schemas = server(Behavior::Succeed).schemas();
        assert!(schemas.resources.contains_key("mock_object"));
        assert!(schemas.data_sources.contains_key("mock_object_list"));
    }
}
