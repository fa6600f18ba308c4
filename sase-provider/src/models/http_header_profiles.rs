use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpHeaderProfile {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_header_insertion: Vec<HeaderInsertion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderInsertion {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Vec<InsertionType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionType {
    pub name: String,
    pub domains: Vec<String>,
    pub headers: Vec<InsertedHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertedHeader {
    pub name: String,
    pub header: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
}

api_object!(HttpHeaderProfile, "/sse/config/v1/http-header-profiles");
