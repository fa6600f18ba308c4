use serde::{Deserialize, Serialize};

use super::anti_spyware_profiles::Action;

/// A custom threat signature for anti-spyware profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiSpywareSignature {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub threat_id: i64,
    pub threatname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bugtraq: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cve: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendor: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signature {
    Combination(Combination),
    Standard(Vec<StandardSignature>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_attribute: Option<TimeAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardSignature {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_free: Option<bool>,
}

api_object!(AntiSpywareSignature, "/sse/config/v1/anti-spyware-signatures");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Empty;

    #[test]
    fn standard_signature_is_a_list() {
        let parsed: AntiSpywareSignature = serde_json::from_value(serde_json::json!({
            "id": "sig-1",
            "threat_id": 6900001,
            "threatname": "custom-c2",
            "default_action": {"drop": {}},
            "cve": ["CVE-2024-0001"],
            "signature": {"standard": [{"name": "s1", "scope": "session"}]}
        }))
        .unwrap();
        assert_eq!(parsed.default_action, Some(Action::Drop(Empty {})));
        match parsed.signature {
            Some(Signature::Standard(entries)) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].scope.as_deref(), Some("session"));
            }
            other => panic!("unexpected signature: {:?}", other),
        }
    }

    #[test]
    fn combination_serializes_nested() {
        let signature = Signature::Combination(Combination {
            order_free: Some(true),
            time_attribute: Some(TimeAttribute {
                interval: Some(60),
                threshold: Some(5),
                track_by: Some("source".to_string()),
            }),
        });
        assert_eq!(
            serde_json::to_value(&signature).unwrap(),
            serde_json::json!({"combination": {
                "order_free": true,
                "time_attribute": {"interval": 60, "threshold": 5, "track_by": "source"}
            }})
        );
    }
}
