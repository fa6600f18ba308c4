use serde::{Deserialize, Serialize};

use super::Empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationProfile {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockout: Option<Lockout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<AuthMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_factor_auth: Option<MultiFactorAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_sign_on: Option<SingleSignOn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_modifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lockout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_attempts: Option<i64>,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockout_time: Option<i64>,
}

/// Backend that verifies credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    LocalDatabase(Empty),
    Cloud(CloudMethod),
    Kerberos(KerberosMethod),
    Ldap(LdapMethod),
    Radius(RadiusMethod),
    SamlIdp(SamlIdpMethod),
    Tacplus(TacplusMethod),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KerberosMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdapMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd_exp_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkgroup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamlIdpMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name_usergroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_single_logout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_signing_certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacplusMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkgroup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiFactorAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleSignOn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerberos_keytab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_principal: Option<String>,
}

api_object!(AuthenticationProfile, "/sse/config/v1/authentication-profiles");
