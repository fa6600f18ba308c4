use std::fmt;

use sase_core::provider::ProviderError;
use serde::Deserialize;
use thiserror::Error;

/// API error code for a missing object
pub const OBJECT_NOT_FOUND_CODE: &str = "E005";

/// One entry of the `_errors` array in an API error body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.is_empty(), &self.details) {
            (true, _) => write!(f, "{}", self.message),
            (false, Some(details)) if !details.is_null() => {
                write!(f, "{} {} ({})", self.code, self.message, details)
            }
            (false, _) => write!(f, "{} {}", self.code, self.message),
        }
    }
}

/// Error body returned by the API
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "_errors", default)]
    pub errors: Vec<ApiErrorDetail>,
    #[serde(rename = "_request_id", default)]
    pub request_id: Option<String>,
}

/// Errors raised while talking to the SASE API.
///
/// Messages never include credentials or tokens.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed: {message}")]
    Auth { message: String },

    #[error("API error ({status}): {}", format_errors(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiErrorDetail>,
        request_id: Option<String>,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid client configuration: {message}")]
    Config { message: String },
}

fn format_errors(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub fn is_object_not_found(&self) -> bool {
        match self {
            ApiError::Api { status, errors, .. } => {
                *status == 404
                    || errors.iter().any(|e| {
                        e.code == OBJECT_NOT_FOUND_CODE
                            || e.message.eq_ignore_ascii_case("Object Not Found")
                    })
            }
            _ => false,
        }
    }
}

/// True when the API reports that the requested object does not exist
pub fn is_object_not_found(err: &ApiError) -> bool {
    err.is_object_not_found()
}

impl From<ApiError> for ProviderError {
    fn from(err: ApiError) -> Self {
        ProviderError::api("API request failed").with_cause(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, code: &str, message: &str) -> ApiError {
        ApiError::Api {
            status,
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            }],
            request_id: Some("req-1".to_string()),
        }
    }

    #[test]
    fn not_found_by_status() {
        assert!(is_object_not_found(&api_error(404, "", "")));
    }

    #[test]
    fn not_found_by_code() {
        assert!(is_object_not_found(&api_error(400, "E005", "Object Not Found")));
        assert!(is_object_not_found(&api_error(400, "", "object not found")));
    }

    #[test]
    fn other_errors_are_not_not_found() {
        assert!(!is_object_not_found(&api_error(400, "E003", "Invalid Object")));
        assert!(!is_object_not_found(&ApiError::Auth {
            message: "bad credentials".to_string()
        }));
    }

    #[test]
    fn parses_error_body() {
        let body = r#"{"_errors":[{"code":"E016","message":"Not Authenticated","details":{"errorType":"Not Authenticated"}}],"_request_id":"abc"}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.request_id.as_deref(), Some("abc"));
        assert_eq!(parsed.errors[0].code, "E016");
    }

    #[test]
    fn api_error_display() {
        let err = api_error(409, "E006", "Name Not Unique");
        assert_eq!(err.to_string(), "API error (409): E006 Name Not Unique");

        let empty = ApiError::Api {
            status: 500,
            errors: vec![],
            request_id: None,
        };
        assert_eq!(empty.to_string(), "API error (500): no error details");
    }

    #[test]
    fn converts_to_provider_api_error() {
        let err: ProviderError = api_error(500, "E999", "boom").into();
        assert_eq!(err.kind.summary(), "Error in API call");
        assert!(err.detail().contains("E999 boom"));
    }
}
