use serde::{Deserialize, Serialize};

use super::Empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlAccessProfile {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block: Vec<String>,
    #[serde(rename = "continue", default, skip_serializing_if = "Vec::is_empty")]
    pub continue_list: Vec<String>,
    #[serde(rename = "override", default, skip_serializing_if = "Vec::is_empty")]
    pub override_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_inline_cat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_inline_cat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_enforcement: Option<CredentialEnforcement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_container_page_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_http_hdr_referer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_http_hdr_user_agent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_http_hdr_xff: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mlav_category_exception: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_search_enforcement: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialEnforcement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block: Vec<String>,
    #[serde(rename = "continue", default, skip_serializing_if = "Vec::is_empty")]
    pub continue_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CredentialMode>,
}

/// How user credentials are detected in submitted forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialMode {
    Disabled(Empty),
    DomainCredentials(Empty),
    IpUser(Empty),
    GroupMapping(String),
}

api_object!(UrlAccessProfile, "/sse/config/v1/url-access-profiles");
