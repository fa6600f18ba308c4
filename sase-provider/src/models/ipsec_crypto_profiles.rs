use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpsecCryptoProfile {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ah: Option<Ah>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dh_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esp: Option<Esp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifesize: Option<Lifesize>,
    pub lifetime: Lifetime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ah {
    pub authentication: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Esp {
    pub authentication: Vec<String>,
    pub encryption: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifesize {
    Kb(i64),
    Mb(i64),
    Gb(i64),
    Tb(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

api_object!(IpsecCryptoProfile, "/sse/config/v1/ipsec-crypto-profiles");
