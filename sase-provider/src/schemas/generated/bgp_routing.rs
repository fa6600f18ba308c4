//! bgp_routing schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: bgp-routing
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_bgp_routing (bgp-routing)
pub fn bgp_routing_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_bgp_routing",
        list_type_name: "sase_bgp_routing_list",
        scope: Scope::Global,
        schema: ResourceSchema::new("sase_bgp_routing")
        .with_description("BGP routing settings for the tenant.")
        .attribute(
            AttributeSchema::new("accept_route_over_sc", AttributeType::Bool)
                .with_description("Accept routes over service connections.")
                .with_provider_name("accept_route_over_SC"),
        )
        .attribute(
            AttributeSchema::new("add_host_route_to_ike_peer", AttributeType::Bool)
                .with_description("Add a host route to the IKE peer.")
                .with_provider_name("add_host_route_to_ike_peer"),
        )
        .attribute(
            AttributeSchema::new("backbone_routing", AttributeType::String)
                .with_description("The backbone routing mode.")
                .with_provider_name("backbone_routing")
                .with_validator(Validator::one_of(["no-asymmetric-routing", "asymmetric-routing-only", "asymmetric-routing-with-load-share"])),
        )
        .attribute(
            AttributeSchema::new("outbound_routes_for_services", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Outbound routes for services.")
                .with_provider_name("outbound_routes_for_services"),
        )
        .attribute(
            AttributeSchema::new("routing_preference", routing_preference_type())
                .with_description("The routing preference; exactly one may be set.")
                .with_provider_name("routing_preference")
                .with_validator(Validator::exactly_one_of(["default", "hot_potato_routing"])),
        )
        .attribute(
            AttributeSchema::new("withdraw_static_route", AttributeType::Bool)
                .with_description("Withdraw static routes.")
                .with_provider_name("withdraw_static_route"),
        ),
    }
}

fn routing_preference_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("default", AttributeType::Flag)
            .with_provider_name("default"),
        AttributeSchema::new("hot_potato_routing", AttributeType::Flag)
            .with_provider_name("hot_potato_routing"),
    ])
}
