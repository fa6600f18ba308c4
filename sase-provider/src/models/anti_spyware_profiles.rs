use serde::{Deserialize, Serialize};

use super::Empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiSpywareProfile {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_inline_analysis: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_exception_edl_url: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_exception_ip_address: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mica_engine_spyware_enabled: Vec<MicaEngineSpywareEnabled>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threat_exception: Vec<ThreatException>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicaEngineSpywareEnabled {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_policy_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_capture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub severity: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_name: Option<String>,
}

/// What to do with matching traffic; exactly one may be chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Alert(Empty),
    Allow(Empty),
    Drop(Empty),
    ResetBoth(Empty),
    ResetClient(Empty),
    ResetServer(Empty),
    BlockIp(BlockIpConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockIpConfig {
    /// "source" or "source-and-destination"
    pub track_by: String,
    /// Seconds
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatException {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ExceptionAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exempt_ip: Vec<ExemptIp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_capture: Option<String>,
}

/// Threat exception action; `default` defers to the signature's own action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionAction {
    Default(Empty),
    Alert(Empty),
    Allow(Empty),
    Drop(Empty),
    ResetBoth(Empty),
    ResetClient(Empty),
    ResetServer(Empty),
    BlockIp(BlockIpConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExemptIp {
    pub name: String,
}

api_object!(AntiSpywareProfile, "/sse/config/v1/anti-spyware-profiles");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_action_is_an_empty_object() {
        let action = Action::Alert(Empty {});
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            serde_json::json!({"alert": {}})
        );
        let block: Action = serde_json::from_value(serde_json::json!({
            "block_ip": {"track_by": "source", "duration": 300}
        }))
        .unwrap();
        assert_eq!(
            block,
            Action::BlockIp(BlockIpConfig {
                track_by: "source".to_string(),
                duration: 300
            })
        );
    }

    #[test]
    fn two_actions_at_once_are_rejected() {
        let both: Result<Action, _> =
            serde_json::from_value(serde_json::json!({"alert": {}, "drop": {}}));
        assert!(both.is_err());
    }

    #[test]
    fn profile_from_api_response() {
        let profile: AntiSpywareProfile = serde_json::from_value(serde_json::json!({
            "id": "5c8f0f6a",
            "name": "best-practice",
            "folder": "Shared",
            "rules": [{
                "name": "critical",
                "action": {"reset_both": {}},
                "severity": ["critical", "high"],
                "packet_capture": "single-packet"
            }],
            "threat_exception": [{"name": "10001", "action": {"default": {}}}]
        }))
        .unwrap();
        assert_eq!(profile.object_id.as_deref(), Some("5c8f0f6a"));
        assert_eq!(profile.rules[0].action, Some(Action::ResetBoth(Empty {})));
        assert_eq!(
            profile.threat_exception[0].action,
            Some(ExceptionAction::Default(Empty {}))
        );
    }
}
