//! OAuth2 client-credentials authentication

use std::fmt;

use serde::Deserialize;

use super::error::{ApiError, ErrorResponse};

/// Service account credentials
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    /// Usually `tsg_id:<tenant service group>`
    scope: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: scope.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Exchange client credentials for an access token
pub async fn fetch_token(
    http: &reqwest::Client,
    auth_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse, ApiError> {
    tracing::debug!(auth_url, client_id = credentials.client_id(), "requesting access token");

    let response = http
        .post(auth_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "client_credentials"),
            ("scope", credentials.scope.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Auth errors come either in the API's `_errors` shape or as OAuth2 `error_description`
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.errors.first().map(|d| d.message.clone()))
            .filter(|m| !m.is_empty())
            .or_else(|| {
                serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| {
                        v.get("error_description")
                            .or_else(|| v.get("error"))
                            .and_then(|m| m.as_str())
                            .map(str::to_string)
                    })
            })
            .unwrap_or_else(|| format!("token request returned status {}", status.as_u16()));
        return Err(ApiError::Auth { message });
    }

    let token: TokenResponse = serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        what: "token response".to_string(),
        source,
    })?;
    if token.access_token.is_empty() {
        return Err(ApiError::Auth {
            message: "token response did not contain an access token".to_string(),
        });
    }
    Ok(token)
}
