//! url_access_profiles schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: url-access-profiles
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_url_access_profiles (url-access-profiles)
pub fn url_access_profiles_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_url_access_profiles",
        list_type_name: "sase_url_access_profiles_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_url_access_profiles")
        .with_description("URL access profiles.")
        .attribute(
            AttributeSchema::new("alert", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Categories to alert on.")
                .with_provider_name("alert"),
        )
        .attribute(
            AttributeSchema::new("allow", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Categories to allow.")
                .with_provider_name("allow"),
        )
        .attribute(
            AttributeSchema::new("block", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Categories to block.")
                .with_provider_name("block"),
        )
        .attribute(
            AttributeSchema::new("cloud_inline_cat", AttributeType::Bool)
                .with_description("Enable cloud inline categorization.")
                .with_provider_name("cloud_inline_cat"),
        )
        .attribute(
            AttributeSchema::new("continue", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Categories that require the user to continue.")
                .with_provider_name("continue"),
        )
        .attribute(
            AttributeSchema::new("credential_enforcement", credential_enforcement_type())
                .with_description("The credential enforcement settings.")
                .with_provider_name("credential_enforcement"),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("The description.")
                .with_provider_name("description")
                .with_validator(Validator::LengthAtMost(255)),
        )
        .attribute(
            AttributeSchema::new("local_inline_cat", AttributeType::Bool)
                .with_description("Enable local inline categorization.")
                .with_provider_name("local_inline_cat"),
        )
        .attribute(
            AttributeSchema::new("log_container_page_only", AttributeType::Bool)
                .with_description("Log the container page only.")
                .with_provider_name("log_container_page_only")
                .with_default(true),
        )
        .attribute(
            AttributeSchema::new("log_http_hdr_referer", AttributeType::Bool)
                .with_description("Log the HTTP Referer header.")
                .with_provider_name("log_http_hdr_referer")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("log_http_hdr_user_agent", AttributeType::Bool)
                .with_description("Log the HTTP User-Agent header.")
                .with_provider_name("log_http_hdr_user_agent")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("log_http_hdr_xff", AttributeType::Bool)
                .with_description("Log the HTTP X-Forwarded-For header.")
                .with_provider_name("log_http_hdr_xff")
                .with_default(false),
        )
        .attribute(
            AttributeSchema::new("mlav_category_exception", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Categories excluded from machine-learning analysis.")
                .with_provider_name("mlav_category_exception"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the profile.")
                .with_provider_name("name"),
        )
        .attribute(
            AttributeSchema::new("override", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Categories that require an override password.")
                .with_provider_name("override"),
        )
        .attribute(
            AttributeSchema::new("safe_search_enforcement", AttributeType::Bool)
                .with_description("Enforce safe search.")
                .with_provider_name("safe_search_enforcement")
                .with_default(false),
        ),
    }
}

fn credential_enforcement_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("alert", AttributeType::List(Box::new(AttributeType::String)))
            .with_description("Categories to alert on.")
            .with_provider_name("alert"),
        AttributeSchema::new("allow", AttributeType::List(Box::new(AttributeType::String)))
            .with_description("Categories to allow.")
            .with_provider_name("allow"),
        AttributeSchema::new("block", AttributeType::List(Box::new(AttributeType::String)))
            .with_description("Categories to block.")
            .with_provider_name("block"),
        AttributeSchema::new("continue", AttributeType::List(Box::new(AttributeType::String)))
            .with_description("Categories that require the user to continue.")
            .with_provider_name("continue"),
        AttributeSchema::new("log_severity", AttributeType::String)
            .with_description("The log severity.")
            .with_provider_name("log_severity")
            .with_default("medium"),
        AttributeSchema::new("mode", mode_type())
            .with_description("The credential detection mode; exactly one may be set.")
            .with_provider_name("mode")
            .with_validator(Validator::exactly_one_of(["disabled", "domain_credentials", "group_mapping", "ip_user"])),
    ])
}

fn mode_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("disabled", AttributeType::Flag)
            .with_provider_name("disabled"),
        AttributeSchema::new("domain_credentials", AttributeType::Flag)
            .with_provider_name("domain_credentials"),
        AttributeSchema::new("group_mapping", AttributeType::String)
            .with_description("The group mapping settings.")
            .with_provider_name("group_mapping"),
        AttributeSchema::new("ip_user", AttributeType::Flag)
            .with_provider_name("ip_user"),
    ])
}
