//! app_override_rules schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: app-override-rules
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_app_override_rules (app-override-rules)
pub fn app_override_rules_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_app_override_rules",
        list_type_name: "sase_app_override_rules_list",
        scope: Scope::Position,
        schema: ResourceSchema::new("sase_app_override_rules")
        .with_description("Application override rules.")
        .attribute(
            AttributeSchema::new("application", AttributeType::String)
                .required()
                .with_description("The application.")
                .with_provider_name("application"),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("The description.")
                .with_provider_name("description")
                .with_validator(Validator::LengthAtMost(1024)),
        )
        .attribute(
            AttributeSchema::new("destination", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("The destination addresses.")
                .with_provider_name("destination"),
        )
        .attribute(
            AttributeSchema::new("disabled", AttributeType::Bool)
                .with_description("Disable the rule.")
                .with_provider_name("disabled")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("from", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("The source zones.")
                .with_provider_name("from"),
        )
        .attribute(
            AttributeSchema::new("group_tag", AttributeType::String)
                .with_description("The group tag.")
                .with_provider_name("group_tag"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the rule.")
                .with_provider_name("name")
                .with_validator(Validator::LengthAtMost(63)),
        )
        .attribute(
            AttributeSchema::new("negate_destination", AttributeType::Bool)
                .with_description("Negate the destination.")
                .with_provider_name("negate_destination")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("negate_source", AttributeType::Bool)
                .with_description("Negate the source.")
                .with_provider_name("negate_source")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("port", AttributeType::String)
                .required()
                .with_description("The port; a number between 0 and 65535.")
                .with_provider_name("port")
                .with_validator(Validator::Matches("^[0-9]{1,5}$".to_string())),
        )
        .attribute(
            AttributeSchema::new("protocol", AttributeType::String)
                .required()
                .with_description("The protocol.")
                .with_provider_name("protocol")
                .with_validator(Validator::one_of(["tcp", "udp"])),
        )
        .attribute(
            AttributeSchema::new("source", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("The source addresses.")
                .with_provider_name("source"),
        )
        .attribute(
            AttributeSchema::new("tag", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Tags.")
                .with_provider_name("tag"),
        )
        .attribute(
            AttributeSchema::new("to", AttributeType::List(Box::new(AttributeType::String)))
                .required()
                .with_description("The destination zones.")
                .with_provider_name("to"),
        ),
    }
}
