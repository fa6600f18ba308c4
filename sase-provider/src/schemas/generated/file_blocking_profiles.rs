//! file_blocking_profiles schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: file-blocking-profiles
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_file_blocking_profiles (file-blocking-profiles)
pub fn file_blocking_profiles_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_file_blocking_profiles",
        list_type_name: "sase_file_blocking_profiles_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_file_blocking_profiles")
        .with_description("File blocking profiles.")
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("The description.")
                .with_provider_name("description"),
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
        ),
    }
}

fn rules_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("action", AttributeType::String)
            .with_description("The action to take.")
            .with_provider_name("action")
            .with_validator(Validator::one_of(["alert", "block", "continue"]))
            .with_default("alert"),
        AttributeSchema::new("application", AttributeType::List(Box::new(AttributeType::String)))
            .required()
            .with_description("The applications.")
            .with_provider_name("application"),
        AttributeSchema::new("direction", AttributeType::String)
            .with_description("The direction of the file transfer.")
            .with_provider_name("direction")
            .with_validator(Validator::one_of(["download", "upload", "both"]))
            .with_default("both"),
        AttributeSchema::new("file_type", AttributeType::List(Box::new(AttributeType::String)))
            .required()
            .with_description("The file types.")
            .with_provider_name("file_type"),
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The rule name.")
            .with_provider_name("name"),
    ])
}
