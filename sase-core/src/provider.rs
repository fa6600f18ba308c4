//! Provider - Traits abstracting resource and data source operations
//!
//! A Provider exposes a set of resource types and data sources for one
//! remote API. Each operation converts attribute values into API calls and
//! the responses back into state.

use std::future::Future;
use std::pin::Pin;

use crate::id::IdError;
use crate::resource::{Attributes, State, Value};
use crate::schema::ResourceSchema;

/// Broad classification of a provider failure, used for diagnostic summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed composite ID
    InvalidId,
    /// Remote API returned an error or could not be reached
    Api,
    /// Configuration could not be turned into a request
    InvalidConfig,
    /// API response could not be turned into state
    Mapping,
}

impl ErrorKind {
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorKind::InvalidId => "Error in parsing ID",
            ErrorKind::Api => "Error in API call",
            ErrorKind::InvalidConfig => "Invalid configuration",
            ErrorKind::Mapping => "Error mapping state",
        }
    }
}

/// Error type for Provider operations
#[derive(Debug)]
pub struct ProviderError {
    pub kind: ErrorKind,
    pub message: String,
    /// Type name of the resource or data source involved
    pub resource_type: Option<String>,
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref resource_type) = self.resource_type {
            write!(f, "[{}] {}", resource_type, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

impl ProviderError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            resource_type: None,
            cause: None,
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Api, message)
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig, message)
    }

    pub fn mapping(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Mapping, message)
    }

    pub fn for_resource(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Message followed by the chain of causes
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !detail.contains(&text) {
                detail.push_str(": ");
                detail.push_str(&text);
            }
            source = cause.source();
        }
        detail
    }
}

impl From<IdError> for ProviderError {
    fn from(err: IdError) -> Self {
        ProviderError::new(ErrorKind::InvalidId, "Invalid resource ID").with_cause(err)
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Return type for async operations
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A managed resource type
///
/// Implementations build composite IDs on create and parse them back on
/// read, update and delete. All operations are async and involve side effects.
pub trait Resource: Send + Sync {
    /// Terraform type name (e.g., "sase_addresses")
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> ResourceSchema;

    /// Create the remote object from planned attributes
    ///
    /// Returns State with identifier set to the composite ID
    fn create<'a>(&'a self, planned: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>>;

    /// Refresh the state of an existing object
    ///
    /// Returns `State::not_found()` if the remote object no longer exists
    fn read<'a>(&'a self, current: &'a State) -> BoxFuture<'a, ProviderResult<State>>;

    fn update<'a>(
        &'a self,
        prior: &'a State,
        planned: &'a Attributes,
    ) -> BoxFuture<'a, ProviderResult<State>>;

    /// Delete the remote object; an object that is already gone is not an error
    fn delete<'a>(&'a self, prior: &'a State) -> BoxFuture<'a, ProviderResult<()>>;

    /// State to read after `terraform import`; the ID is passed through as is
    fn import_state(&self, id: &str) -> ProviderResult<State> {
        Ok(State::existing(self.type_name(), Attributes::new()).with_identifier(id))
    }
}

/// A read-only data source
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> ResourceSchema;

    /// Read using the (validated, defaulted) configuration
    fn read<'a>(&'a self, config: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>>;
}

/// Main Provider trait
pub trait Provider: Send + Sync {
    /// Name of this Provider (e.g., "sase")
    fn name(&self) -> &'static str;

    /// Attributes accepted in the provider configuration block
    fn schema(&self) -> ResourceSchema;

    fn resources(&self) -> Vec<Box<dyn Resource>>;

    fn data_sources(&self) -> Vec<Box<dyn DataSource>>;
}

/// Provider implementation for Box<dyn Provider>
/// This enables dynamic dispatch for Providers
impl Provider for Box<dyn Provider> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn schema(&self) -> ResourceSchema {
        (**self).schema()
    }

    fn resources(&self) -> Vec<Box<dyn Resource>> {
        (**self).resources()
    }

    fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        (**self).data_sources()
    }
}

/// Required string attribute from a configuration or plan
pub fn required_str<'a>(attributes: &'a Attributes, name: &str) -> ProviderResult<&'a str> {
    attributes
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::invalid_config(format!("Attribute '{}' is required", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Mock Resource for testing
    struct MockResource;

    impl Resource for MockResource {
        fn type_name(&self) -> &'static str {
            "mock_thing"
        }

        fn schema(&self) -> ResourceSchema {
            ResourceSchema::new("mock_thing")
        }

        fn create<'a>(&'a self, planned: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async move {
                Ok(State::existing("mock_thing", planned.clone()).with_identifier("Shared:mock-id-123"))
            })
        }

        fn read<'a>(&'a self, _current: &'a State) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async { Ok(State::not_found("mock_thing")) })
        }

        fn update<'a>(
            &'a self,
            prior: &'a State,
            planned: &'a Attributes,
        ) -> BoxFuture<'a, ProviderResult<State>> {
            Box::pin(async move {
                let mut state = State::existing("mock_thing", planned.clone());
                state.identifier = prior.identifier.clone();
                Ok(state)
            })
        }

        fn delete<'a>(&'a self, _prior: &'a State) -> BoxFuture<'a, ProviderResult<()>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test]
    async fn mock_resource_read_returns_not_found() {
        let state = MockResource.read(&State::not_found("mock_thing")).await.unwrap();
        assert!(!state.exists);
    }

    #[tokio::test]
    async fn mock_resource_create_returns_existing() {
        let state = MockResource.create(&HashMap::new()).await.unwrap();
        assert!(state.exists);
        assert_eq!(state.identifier, Some("Shared:mock-id-123".to_string()));
    }

    #[test]
    fn default_import_passes_id_through() {
        let state = MockResource.import_state("Shared:abc").unwrap();
        assert_eq!(state.id(), Some("Shared:abc"));
        assert!(state.exists);
    }

    #[test]
    fn id_errors_become_parse_failures() {
        let err: ProviderError = crate::id::decode("Shared", 2).unwrap_err().into();
        assert_eq!(err.kind.summary(), "Error in parsing ID");
        assert!(err.detail().contains("Expected 2 tokens"));
    }

    #[test]
    fn display_includes_resource_type() {
        let err = ProviderError::api("request failed").for_resource("sase_addresses");
        assert_eq!(err.to_string(), "[sase_addresses] request failed");
    }
}
