use serde::{Deserialize, Serialize};

/// GlobalProtect authentication settings for one client OS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileAgentAuthenticationSetting {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    pub authentication_profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_credential_or_client_cert_required: Option<bool>,
}

api_object!(
    MobileAgentAuthenticationSetting,
    "/sse/config/v1/mobile-agent/authentication-settings"
);
