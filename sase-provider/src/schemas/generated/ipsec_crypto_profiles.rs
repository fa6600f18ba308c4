//! ipsec_crypto_profiles schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: ipsec-crypto-profiles
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_ipsec_crypto_profiles (ipsec-crypto-profiles)
pub fn ipsec_crypto_profiles_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_ipsec_crypto_profiles",
        list_type_name: "sase_ipsec_crypto_profiles_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_ipsec_crypto_profiles")
        .with_description("IPsec crypto profiles.")
        .attribute(
            AttributeSchema::new("ah", ah_type())
                .with_description("The AH settings.")
                .with_provider_name("ah"),
        )
        .attribute(
            AttributeSchema::new("dh_group", AttributeType::String)
                .with_description("The phase-2 DH group (PFS DH group).")
                .with_provider_name("dh_group")
                .with_validator(Validator::one_of(["no-pfs", "group1", "group2", "group5", "group14", "group19", "group20"]))
                .with_default("group2"),
        )
        .attribute(
            AttributeSchema::new("esp", esp_type())
                .with_description("The ESP settings.")
                .with_provider_name("esp"),
        )
        .attribute(
            AttributeSchema::new("lifesize", lifesize_type())
                .with_description("The lifesize; exactly one unit may be set.")
                .with_provider_name("lifesize")
                .with_validator(Validator::exactly_one_of(["gb", "kb", "mb", "tb"])),
        )
        .attribute(
            AttributeSchema::new("lifetime", lifetime_type())
                .required()
                .with_description("The lifetime; exactly one unit may be set.")
                .with_provider_name("lifetime")
                .with_validator(Validator::exactly_one_of(["days", "hours", "minutes", "seconds"])),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("Alphanumeric string begin with letter: [0-9a-zA-Z._-].")
                .with_provider_name("name")
                .with_validator(Validator::LengthAtMost(31)),
        ),
    }
}

fn ah_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("authentication", AttributeType::List(Box::new(AttributeType::String)))
            .required()
            .with_description("The authentication algorithms.")
            .with_provider_name("authentication")
            .with_validator(Validator::one_of(["md5", "sha1", "sha256", "sha384", "sha512"])),
    ])
}

fn esp_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("authentication", AttributeType::List(Box::new(AttributeType::String)))
            .required()
            .with_description("The authentication algorithms.")
            .with_provider_name("authentication"),
        AttributeSchema::new("encryption", AttributeType::List(Box::new(AttributeType::String)))
            .required()
            .with_description("The encryption algorithms.")
            .with_provider_name("encryption")
            .with_validator(Validator::one_of(["des", "3des", "aes-128-cbc", "aes-192-cbc", "aes-256-cbc", "aes-128-gcm", "aes-256-gcm", "null"])),
    ])
}

fn lifesize_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("gb", AttributeType::Int)
            .with_description("Specify lifesize in gigabytes (GB).")
            .with_provider_name("gb")
            .with_validator(Validator::Between(1, 65535)),
        AttributeSchema::new("kb", AttributeType::Int)
            .with_description("Specify lifesize in kilobytes (KB).")
            .with_provider_name("kb")
            .with_validator(Validator::Between(1, 65535)),
        AttributeSchema::new("mb", AttributeType::Int)
            .with_description("Specify lifesize in megabytes (MB).")
            .with_provider_name("mb")
            .with_validator(Validator::Between(1, 65535)),
        AttributeSchema::new("tb", AttributeType::Int)
            .with_description("Specify lifesize in terabytes (TB).")
            .with_provider_name("tb")
            .with_validator(Validator::Between(1, 65535)),
    ])
}

fn lifetime_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("days", AttributeType::Int)
            .with_description("Specify lifetime in days.")
            .with_provider_name("days")
            .with_validator(Validator::Between(1, 365)),
        AttributeSchema::new("hours", AttributeType::Int)
            .with_description("Specify lifetime in hours.")
            .with_provider_name("hours")
            .with_validator(Validator::Between(1, 65535)),
        AttributeSchema::new("minutes", AttributeType::Int)
            .with_description("Specify lifetime in minutes.")
            .with_provider_name("minutes")
            .with_validator(Validator::Between(3, 65535)),
        AttributeSchema::new("seconds", AttributeType::Int)
            .with_description("Specify lifetime in seconds.")
            .with_provider_name("seconds")
            .with_validator(Validator::Between(180, 65535)),
    ])
}
