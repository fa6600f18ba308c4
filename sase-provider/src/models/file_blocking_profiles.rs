use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBlockingProfile {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<FileBlockingRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBlockingRule {
    pub name: String,
    /// "alert", "block" or "continue"
    pub action: String,
    pub application: Vec<String>,
    /// "download", "upload" or "both"
    pub direction: String,
    pub file_type: Vec<String>,
}

api_object!(FileBlockingProfile, "/sse/config/v1/file-blocking-profiles");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_requires_direction() {
        let missing: Result<FileBlockingRule, _> = serde_json::from_value(serde_json::json!({
            "name": "r", "action": "block", "application": ["any"], "file_type": ["exe"]
        }));
        assert!(missing.is_err());

        let profile: FileBlockingProfile = serde_json::from_value(serde_json::json!({
            "id": "fb-1",
            "name": "strict",
            "rules": [{
                "name": "block-exe",
                "action": "block",
                "application": ["any"],
                "direction": "both",
                "file_type": ["exe", "dll"]
            }]
        }))
        .unwrap();
        assert_eq!(profile.rules[0].file_type, vec!["exe", "dll"]);
    }
}
