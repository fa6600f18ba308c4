//! http_header_profiles schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: http-header-profiles
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Returns the schema config for sase_http_header_profiles (http-header-profiles)
pub fn http_header_profiles_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_http_header_profiles",
        list_type_name: "sase_http_header_profiles_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_http_header_profiles")
        .with_description("HTTP header insertion profiles.")
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("The description.")
                .with_provider_name("description"),
        )
        .attribute(
            AttributeSchema::new("http_header_insertion", AttributeType::List(Box::new(http_header_insertion_type())))
                .with_description("The header insertion rules.")
                .with_provider_name("http_header_insertion"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the profile.")
                .with_provider_name("name"),
        ),
    }
}

fn http_header_insertion_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The name.")
            .with_provider_name("name"),
        AttributeSchema::new("type", AttributeType::List(Box::new(type_type())))
            .required()
            .with_description("The insertion types.")
            .with_provider_name("type"),
    ])
}

fn type_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("domains", AttributeType::List(Box::new(AttributeType::String)))
            .required()
            .with_description("The domains.")
            .with_provider_name("domains"),
        AttributeSchema::new("headers", AttributeType::List(Box::new(headers_type())))
            .required()
            .with_description("The headers to insert.")
            .with_provider_name("headers"),
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The name.")
            .with_provider_name("name"),
    ])
}

fn headers_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("header", AttributeType::String)
            .required()
            .with_description("The header name.")
            .with_provider_name("header"),
        AttributeSchema::new("log", AttributeType::Bool)
            .with_description("Log the inserted header.")
            .with_provider_name("log")
            .with_default(false),
        AttributeSchema::new("name", AttributeType::String)
            .required()
            .with_description("The name.")
            .with_provider_name("name"),
        AttributeSchema::new("value", AttributeType::String)
            .required()
            .with_description("The header value.")
            .with_provider_name("value"),
    ])
}
