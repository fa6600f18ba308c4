//! HTTP client for the SASE configuration API

pub mod auth;
pub mod error;
pub mod service;
pub mod types;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

pub use error::{ApiError, ApiErrorDetail, is_object_not_found};
pub use service::{ApiObject, Service};
pub use types::{CreateInput, DeleteInput, ListInput, ListResponse, ReadInput, UpdateInput};

use crate::config::{ClientConfig, LogCategories};
use error::ErrorResponse;

/// Authenticated API client, cheap to clone
#[derive(Clone)]
pub struct SaseClient {
    http: reqwest::Client,
    base_url: String,
    logging: LogCategories,
}

impl std::fmt::Debug for SaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaseClient")
            .field("base_url", &self.base_url)
            .field("logging", &self.logging)
            .finish_non_exhaustive()
    }
}

impl SaseClient {
    /// Authenticate with the configured credentials and build a client
    pub async fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        let auth_http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.skip_verify_certificate)
            .build()?;
        let token = auth::fetch_token(&auth_http, &config.auth_url, &config.credentials).await?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| ApiError::Config {
                message: format!("invalid header name '{}'", name),
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| ApiError::Config {
                message: format!("invalid value for header '{}'", name.as_str()),
            })?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.skip_verify_certificate)
            .default_headers(bearer_headers(&token.access_token, headers)?)
            .build()?;

        tracing::debug!(base_url = %config.base_url, "connected to SASE API");
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            logging: config.logging,
        })
    }

    /// Client with a pre-issued token; primarily used for testing with mock servers
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .default_headers(bearer_headers(token, HeaderMap::new())?)
            .build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            logging: LogCategories::default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn logging(&self) -> LogCategories {
        self.logging
    }

    /// Send a request and decode the JSON response
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let text = self.send(method, path, query, body).await?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            what: format!("response from {}", path),
            source,
        })
    }

    /// Send a request and ignore the response body
    pub async fn execute_empty(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, query, body).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        if self.logging.path {
            tracing::debug!(%method, path, ?query, "sending request");
        }
        if self.logging.send
            && let Some(body) = body
        {
            tracing::debug!(path, body = %body, "request body");
        }

        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if self.logging.receive {
            tracing::debug!(path, status = status.as_u16(), body = %text, "response body");
        }

        if !status.is_success() {
            let parsed: ErrorResponse = serde_json::from_str(&text).unwrap_or_default();
            tracing::debug!(
                %method,
                path,
                status = status.as_u16(),
                request_id = parsed.request_id.as_deref().unwrap_or_default(),
                "API request failed"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                errors: parsed.errors,
                request_id: parsed.request_id,
            });
        }

        Ok(text)
    }
}

fn bearer_headers(token: &str, mut headers: HeaderMap) -> Result<HeaderMap, ApiError> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| ApiError::Auth {
            message: "Invalid token format".to_string(),
        })?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
