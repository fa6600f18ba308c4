//! mobile_agent_authentication_settings schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: mobile-agent-authentication-settings
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_mobile_agent_authentication_settings (mobile-agent-authentication-settings)
pub fn mobile_agent_authentication_settings_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_mobile_agent_authentication_settings",
        list_type_name: "sase_mobile_agent_authentication_settings_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_mobile_agent_authentication_settings")
        .with_description("GlobalProtect authentication settings.")
        .attribute(
            AttributeSchema::new("authentication_profile", AttributeType::String)
                .required()
                .with_description("The authentication profile to use.")
                .with_provider_name("authentication_profile"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the authentication rule.")
                .with_provider_name("name"),
        )
        .attribute(
            AttributeSchema::new("os", AttributeType::String)
                .with_description("The operating system this rule applies to.")
                .with_provider_name("os")
                .with_validator(Validator::one_of(["Any", "Android", "Browser", "Chrome", "IoT", "Linux", "Mac", "Satellite", "Windows", "WindowsUWP", "iOS"]))
                .with_default("Any"),
        )
        .attribute(
            AttributeSchema::new("user_credential_or_client_cert_required", AttributeType::Bool)
                .with_description("Require a user credential or a client certificate.")
                .with_provider_name("user_credential_or_client_cert_required"),
        ),
    }
}
