use serde::{Deserialize, Serialize};

/// Application override rule; positioned before or after other rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOverrideRule {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub destination: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub from: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate_destination: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate_source: Option<bool>,
    pub port: String,
    /// "tcp" or "udp"
    pub protocol: String,
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    #[serde(default)]
    pub to: Vec<String>,
}

api_object!(AppOverrideRule, "/sse/config/v1/app-override-rules");
