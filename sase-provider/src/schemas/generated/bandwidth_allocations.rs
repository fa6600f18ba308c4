//! bandwidth_allocations schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: bandwidth-allocations
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for sase_bandwidth_allocations (bandwidth-allocations)
pub fn bandwidth_allocations_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_bandwidth_allocations",
        list_type_name: "sase_bandwidth_allocations_list",
        scope: Scope::Global,
        schema: ResourceSchema::new("sase_bandwidth_allocations")
        .with_description("Bandwidth allocations for remote network regions.")
        .attribute(
            AttributeSchema::new("allocated_bandwidth", AttributeType::Float)
                .required()
                .with_description("Bandwidth to allocate in Mbps.")
                .with_provider_name("allocated_bandwidth"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("Name of the aggregated bandwidth region.")
                .with_provider_name("name")
                .requires_replace(),
        )
        .attribute(
            AttributeSchema::new("qos", qos_type())
                .with_description("The QoS settings.")
                .with_provider_name("qos"),
        )
        .attribute(
            AttributeSchema::new("spn_name_list", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The SPN names for this region.")
                .with_provider_name("spn_name_list")
                .requires_replace(),
        ),
    }
}

fn qos_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("customized", AttributeType::Bool)
            .with_description("Use a customized QoS profile.")
            .with_provider_name("customized"),
        AttributeSchema::new("enabled", AttributeType::Bool)
            .with_description("Enable QoS.")
            .with_provider_name("enabled"),
        AttributeSchema::new("guaranteed_ratio", AttributeType::Float)
            .with_description("The guaranteed ratio for bandwidth.")
            .with_provider_name("guaranteed_ratio"),
        AttributeSchema::new("profile", AttributeType::String)
            .with_description("The QoS profile.")
            .with_provider_name("profile"),
    ])
}
