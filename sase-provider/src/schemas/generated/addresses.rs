//! addresses schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: addresses
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_addresses (addresses)
pub fn addresses_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_addresses",
        list_type_name: "sase_addresses_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_addresses")
        .with_description("Address objects.")
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .with_description("The description of the address object.")
                .with_provider_name("description")
                .with_validator(Validator::LengthAtMost(1023)),
        )
        .attribute(
            AttributeSchema::new("fqdn", AttributeType::String)
                .with_description("The fully qualified domain name of the address object.")
                .with_provider_name("fqdn")
                .with_validator(Validator::LengthAtLeast(1))
                .with_validator(Validator::LengthAtMost(255))
                .with_validator(Validator::Matches("^[a-zA-Z0-9_]([a-zA-Z0-9._-])+[a-zA-Z0-9]$".to_string())),
        )
        .attribute(
            AttributeSchema::new("ip_netmask", AttributeType::String)
                .with_description("The IP address with or without the subnet mask.")
                .with_provider_name("ip_netmask"),
        )
        .attribute(
            AttributeSchema::new("ip_range", AttributeType::String)
                .with_description("The IP address range.")
                .with_provider_name("ip_range"),
        )
        .attribute(
            AttributeSchema::new("ip_wildcard", AttributeType::String)
                .with_description("The IP wildcard mask.")
                .with_provider_name("ip_wildcard"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the address object.")
                .with_provider_name("name")
                .with_validator(Validator::LengthAtMost(63)),
        )
        .attribute(
            AttributeSchema::new("tag", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("Tags associated with the address object.")
                .with_provider_name("tag")
                .with_validator(Validator::LengthAtMost(64))
                .with_validator(Validator::SizeAtMost(64)),
        )
        .with_validator(Validator::exactly_one_of(["fqdn", "ip_netmask", "ip_range", "ip_wildcard"])),
    }
}
