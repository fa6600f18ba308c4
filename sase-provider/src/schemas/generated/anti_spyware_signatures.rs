//! anti_spyware_signatures schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: anti-spyware-signatures
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_anti_spyware_signatures (anti-spyware-signatures)
pub fn anti_spyware_signatures_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_anti_spyware_signatures",
        list_type_name: "sase_anti_spyware_signatures_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_anti_spyware_signatures")
        .with_description("Custom anti-spyware threat signatures.")
        .attribute(
            AttributeSchema::new("bugtraq", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Bugtraq IDs.")
                .with_provider_name("bugtraq"),
        )
        .attribute(
            AttributeSchema::new("comment", AttributeType::String)
                .with_description("The comment.")
                .with_provider_name("comment")
                .with_validator(Validator::LengthAtMost(256)),
        )
        .attribute(
            AttributeSchema::new("cve", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("CVE IDs.")
                .with_provider_name("cve"),
        )
        .attribute(
            AttributeSchema::new("default_action", default_action_type())
                .with_description("The default action; exactly one may be set.")
                .with_provider_name("default_action")
                .with_validator(Validator::exactly_one_of(["alert", "allow", "block_ip", "drop", "reset_both", "reset_client", "reset_server"])),
        )
        .attribute(
            AttributeSchema::new("direction", AttributeType::String)
                .with_description("The traffic direction.")
                .with_provider_name("direction")
                .with_validator(Validator::one_of(["client2server", "server2client", "both"])),
        )
        .attribute(
            AttributeSchema::new("reference", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("References.")
                .with_provider_name("reference"),
        )
        .attribute(
            AttributeSchema::new("severity", AttributeType::String)
                .with_description("The severity.")
                .with_provider_name("severity")
                .with_validator(Validator::one_of(["critical", "low", "high", "medium", "informational"])),
        )
        .attribute(
            AttributeSchema::new("signature", signature_type())
                .with_description("The signature definition; exactly one may be set.")
                .with_provider_name("signature")
                .with_validator(Validator::exactly_one_of(["combination", "standard"])),
        )
        .attribute(
            AttributeSchema::new("threat_id", AttributeType::Int)
                .required()
                .with_description("The threat ID.")
                .with_provider_name("threat_id")
                .with_validator(Validator::Between(15000, 70000000)),
        )
        .attribute(
            AttributeSchema::new("threatname", AttributeType::String)
                .required()
                .with_description("The threat name.")
                .with_provider_name("threatname")
                .with_validator(Validator::LengthAtMost(1024)),
        )
        .attribute(
            AttributeSchema::new("vendor", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Vendor IDs.")
                .with_provider_name("vendor"),
        ),
    }
}

fn default_action_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("alert", AttributeType::Flag)
            .with_provider_name("alert"),
        AttributeSchema::new("allow", AttributeType::Flag)
            .with_provider_name("allow"),
        AttributeSchema::new("block_ip", block_ip_type())
            .with_provider_name("block_ip"),
        AttributeSchema::new("drop", AttributeType::Flag)
            .with_provider_name("drop"),
        AttributeSchema::new("reset_both", AttributeType::Flag)
            .with_provider_name("reset_both"),
        AttributeSchema::new("reset_client", AttributeType::Flag)
            .with_provider_name("reset_client"),
        AttributeSchema::new("reset_server", AttributeType::Flag)
            .with_provider_name("reset_server"),
    ])
}

fn block_ip_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("duration", AttributeType::Int)
            .required()
            .with_description("Duration in seconds.")
            .with_provider_name("duration")
            .with_validator(Validator::Between(1, 3600)),
        AttributeSchema::new("track_by", AttributeType::String)
            .required()
            .with_description("Track by.")
            .with_provider_name("track_by")
            .with_validator(Validator::one_of(["source-and-destination", "source"])),
    ])
}

fn signature_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("combination", combination_type())
            .with_provider_name("combination"),
        AttributeSchema::new("standard", AttributeType::List(Box::new(standard_type())))
            .with_provider_name("standard"),
    ])
}

fn combination_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("order_free", AttributeType::Bool)
            .with_description("Order free.")
            .with_provider_name("order_free")
            .with_default(false),
        AttributeSchema::new("time_attribute", time_attribute_type())
            .with_description("The time attribute.")
            .with_provider_name("time_attribute"),
    ])
}

fn time_attribute_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("interval", AttributeType::Int)
            .with_description("Interval in seconds.")
            .with_provider_name("interval")
            .with_validator(Validator::Between(1, 3600)),
        AttributeSchema::new("threshold", AttributeType::Int)
            .with_description("The threshold.")
            .with_provider_name("threshold")
            .with_validator(Validator::Between(1, 255)),
        AttributeSchema::new("track_by", AttributeType::String)
            .with_description("Track by.")
            .with_provider_name("track_by")
            .with_validator(Validator::one_of(["source-and-destination", "source", "destination"])),
    ])
}

fn standard_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("comment", AttributeType::String)
            .with_description("The comment.")
            .with_provider_name("comment")
            .with_validator(Validator::LengthAtMost(256)),
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The name.")
            .with_provider_name("name"),
        AttributeSchema::new("order_free", AttributeType::Bool)
            .with_description("Order free.")
            .with_provider_name("order_free")
            .with_default(false),
        AttributeSchema::new("scope", AttributeType::String)
            .with_description("The scope.")
            .with_provider_name("scope")
            .with_validator(Validator::one_of(["protocol-data-unit", "session"])),
    ])
}
