//! Typed CRUD calls for one kind of API object

use std::marker::PhantomData;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{CreateInput, DeleteInput, ListInput, ListResponse, ReadInput, UpdateInput};
use super::SaseClient;

/// A configuration object stored under a collection path
pub trait ApiObject: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path (e.g., "/sse/config/v1/addresses")
    const PATH: &'static str;

    /// Server-assigned UUID, present on objects returned by the API
    fn object_id(&self) -> Option<&str>;
}

/// List, read, create, update and delete objects of type `M`
pub struct Service<'a, M> {
    client: &'a SaseClient,
    _model: PhantomData<M>,
}

impl<'a, M: ApiObject> Service<'a, M> {
    pub fn new(client: &'a SaseClient) -> Self {
        Self {
            client,
            _model: PhantomData,
        }
    }

    pub async fn list(&self, input: &ListInput) -> Result<ListResponse<M>, ApiError> {
        self.client
            .execute(Method::GET, M::PATH, &input.query(), None)
            .await
    }

    pub async fn read(&self, input: &ReadInput) -> Result<M, ApiError> {
        let mut query = Vec::new();
        if let Some(folder) = &input.folder {
            query.push(("folder", folder.clone()));
        }
        self.client
            .execute(Method::GET, &object_path::<M>(&input.object_id), &query, None)
            .await
    }

    pub async fn create(&self, input: &CreateInput<M>) -> Result<M, ApiError> {
        let mut query = Vec::new();
        if let Some(folder) = &input.folder {
            query.push(("folder", folder.clone()));
        }
        if let Some(position) = &input.position {
            query.push(("position", position.clone()));
        }
        let body = to_body(&input.request)?;
        if self.client.logging().action {
            tracing::info!(path = M::PATH, ?query, "creating object");
        }
        self.client
            .execute(Method::POST, M::PATH, &query, Some(&body))
            .await
    }

    pub async fn update(&self, input: &UpdateInput<M>) -> Result<M, ApiError> {
        let body = to_body(&input.request)?;
        if self.client.logging().action {
            tracing::info!(path = M::PATH, object_id = %input.object_id, "updating object");
        }
        self.client
            .execute(Method::PUT, &object_path::<M>(&input.object_id), &[], Some(&body))
            .await
    }

    pub async fn delete(&self, input: &DeleteInput) -> Result<(), ApiError> {
        if self.client.logging().action {
            tracing::info!(path = M::PATH, object_id = %input.object_id, "deleting object");
        }
        self.client
            .execute_empty(Method::DELETE, &object_path::<M>(&input.object_id), &[], None)
            .await
    }
}

fn object_path<M: ApiObject>(object_id: &str) -> String {
    format!("{}/{}", M::PATH, object_id)
}

pub(crate) fn to_body<T: Serialize>(request: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(request).map_err(|source| ApiError::Decode {
        what: "request body".to_string(),
        source,
    })
}
