//! anti_spyware_profiles schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: anti-spyware-profiles
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_anti_spyware_profiles (anti-spyware-profiles)
pub fn anti_spyware_profiles_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_anti_spyware_profiles",
        list_type_name: "sase_anti_spyware_profiles_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_anti_spyware_profiles")
        .with_description("Anti-spyware security profiles.")
        .attribute(
            AttributeSchema::new("cloud_inline_analysis", AttributeType::Bool)
                .with_description("Enable cloud inline analysis.")
                .with_provider_name("cloud_inline_analysis")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("The description.")
                .with_provider_name("description"),
        )
        .attribute(
            AttributeSchema::new("inline_exception_edl_url", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The inline exception EDL URLs.")
                .with_provider_name("inline_exception_edl_url"),
        )
        .attribute(
            AttributeSchema::new("inline_exception_ip_address", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The inline exception IP addresses.")
                .with_provider_name("inline_exception_ip_address"),
        )
        .attribute(
            AttributeSchema::new("mica_engine_spyware_enabled", AttributeType::List(Box::new(mica_engine_spyware_enabled_type())))
                .with_description("The MICA engine spyware detectors.")
                .with_provider_name("mica_engine_spyware_enabled"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the profile.")
                .with_provider_name("name"),
        )
        .attribute(
            AttributeSchema::new("rules", AttributeType::List(Box::new(rules_type())))
                .with_description("The rules.")
                .with_provider_name("rules"),
        )
        .attribute(
            AttributeSchema::new("threat_exception", AttributeType::List(Box::new(threat_exception_type())))
                .with_description("The threat exceptions.")
                .with_provider_name("threat_exception"),
        ),
    }
}

fn mica_engine_spyware_enabled_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("inline_policy_action", AttributeType::String)
            .with_description("The inline policy action.")
            .with_provider_name("inline_policy_action")
            .with_validator(Validator::one_of(["alert", "allow", "drop", "reset-both", "reset-client", "reset-server"]))
            .with_default("alert"),
        AttributeSchema::new("name", AttributeType::String)
            .with_description("The detector name.")
            .with_provider_name("name"),
    ])
}

fn rules_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("action", rules_action_type())
            .with_description("The action to take; exactly one may be set.")
            .with_provider_name("action")
            .with_validator(Validator::exactly_one_of(["alert", "allow", "block_ip", "drop", "reset_both", "reset_client", "reset_server"])),
        AttributeSchema::new("category", AttributeType::String)
            .with_description("The threat category.")
            .with_provider_name("category"),
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The rule name.")
            .with_provider_name("name"),
        AttributeSchema::new("packet_capture", AttributeType::String)
            .with_description("The packet capture setting.")
            .with_provider_name("packet_capture")
            .with_validator(Validator::one_of(["disable", "single-packet", "extended-capture"])),
        AttributeSchema::new("severity", AttributeType::List(Box::new(AttributeType::String)))
            .with_description("The severities the rule matches.")
            .with_provider_name("severity"),
        AttributeSchema::new("threat_name", AttributeType::String)
            .with_description("The threat name.")
            .with_provider_name("threat_name")
            .with_validator(Validator::LengthAtLeast(4)),
    ])
}

fn rules_action_type() -> AttributeType {
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

fn threat_exception_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("action", threat_exception_action_type())
            .with_description("The action to take; exactly one may be set.")
            .with_provider_name("action")
            .with_validator(Validator::exactly_one_of(["alert", "allow", "block_ip", "default", "drop", "reset_both", "reset_client", "reset_server"])),
        AttributeSchema::new("exempt_ip", AttributeType::List(Box::new(exempt_ip_type())))
            .with_description("The exempt IP addresses.")
            .with_provider_name("exempt_ip"),
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The threat name or ID.")
            .with_provider_name("name"),
        AttributeSchema::new("notes", AttributeType::String)
            .with_description("Notes.")
            .with_provider_name("notes"),
        AttributeSchema::new("packet_capture", AttributeType::String)
            .with_description("The packet capture setting.")
            .with_provider_name("packet_capture")
            .with_validator(Validator::one_of(["disable", "single-packet", "extended-capture"])),
    ])
}

fn threat_exception_action_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("alert", AttributeType::Flag)
            .with_provider_name("alert"),
        AttributeSchema::new("allow", AttributeType::Flag)
            .with_provider_name("allow"),
        AttributeSchema::new("block_ip", block_ip_type())
            .with_provider_name("block_ip"),
        AttributeSchema::new("default", AttributeType::Flag)
            .with_provider_name("default"),
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

fn exempt_ip_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The exempt IP address.")
            .with_provider_name("name"),
    ])
}
