use serde::{Deserialize, Serialize};

use super::Empty;

/// Singleton path; there is no collection and no object id
pub const PATH: &str = "/sse/config/v1/bgp-routing";

/// Tenant-wide BGP routing settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BgpRouting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_preference: Option<RoutingPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backbone_routing: Option<String>,
    #[serde(
        rename = "accept_route_over_SC",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accept_route_over_sc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_routes_for_services: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_host_route_to_ike_peer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdraw_static_route: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingPreference {
    Default(Empty),
    HotPotatoRouting(Empty),
}
