use serde::{Deserialize, Serialize};

use crate::client::ApiObject;

/// Bandwidth allocated to a remote-network region; identified by name and SPNs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandwidthAllocation {
    pub name: String,
    /// Mbps
    pub allocated_bandwidth: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spn_name_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qos: Option<Qos>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qos {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_ratio: Option<f64>,
}

impl ApiObject for BandwidthAllocation {
    const PATH: &'static str = "/sse/config/v1/bandwidth-allocations";

    fn object_id(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_bandwidth_is_accepted() {
        let parsed: BandwidthAllocation = serde_json::from_value(serde_json::json!({
            "name": "taiwan",
            "allocated_bandwidth": 100,
            "spn_name_list": ["taiwan-spn-1"],
            "qos": {"enabled": true, "guaranteed_ratio": 0.5}
        }))
        .unwrap();
        assert_eq!(parsed.allocated_bandwidth, 100.0);
        assert_eq!(parsed.qos.as_ref().and_then(|q| q.enabled), Some(true));
        assert_eq!(parsed.object_id(), None);
    }
}
