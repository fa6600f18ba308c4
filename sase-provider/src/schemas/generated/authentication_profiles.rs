//! authentication_profiles schema definition for Prisma SASE
//!
//! Auto-generated from OpenAPI schema: authentication-profiles
//!
//! DO NOT EDIT MANUALLY - regenerate with sase-codegen

use super::{SaseSchemaConfig, Scope};
use sase_core::schema::{AttributeSchema, AttributeType, ResourceSchema, Validator};

/// Returns the schema config for sase_authentication_profiles (authentication-profiles)
pub fn authentication_profiles_config() -> SaseSchemaConfig {
    SaseSchemaConfig {
        type_name: "sase_authentication_profiles",
        list_type_name: "sase_authentication_profiles_list",
        scope: Scope::Folder,
        schema: ResourceSchema::new("sase_authentication_profiles")
        .with_description("Authentication profiles.")
        .attribute(
            AttributeSchema::new("allow_list", AttributeType::List(Box::new(AttributeType::String)))
                .with_description("The users and groups allowed to authenticate.")
                .with_provider_name("allow_list"),
        )
        .attribute(
            AttributeSchema::new("lockout", lockout_type())
                .with_description("The lockout settings.")
                .with_provider_name("lockout"),
        )
        .attribute(
            AttributeSchema::new("method", method_type())
                .with_description("The authentication method; exactly one may be set.")
                .with_provider_name("method")
                .with_validator(Validator::exactly_one_of(["cloud", "kerberos", "ldap", "local_database", "radius", "saml_idp", "tacplus"])),
        )
        .attribute(
            AttributeSchema::new("multi_factor_auth", multi_factor_auth_type())
                .with_description("The multi-factor authentication settings.")
                .with_provider_name("multi_factor_auth"),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .with_description("The name of the authentication profile.")
                .with_provider_name("name"),
        )
        .attribute(
            AttributeSchema::new("single_sign_on", single_sign_on_type())
                .with_description("The single sign-on settings.")
                .with_provider_name("single_sign_on"),
        )
        .attribute(
            AttributeSchema::new("user_domain", AttributeType::String)
                .with_description("The user domain.")
                .with_provider_name("user_domain")
                .with_validator(Validator::LengthAtMost(63)),
        )
        .attribute(
            AttributeSchema::new("username_modifier", AttributeType::String)
                .with_description("The username modifier.")
                .with_provider_name("username_modifier")
                .with_validator(Validator::one_of(["%USERINPUT%", "%USERINPUT%@%USERDOMAIN%", "%USERDOMAIN%\\%USERINPUT%"])),
        ),
    }
}

fn lockout_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("failed_attempts", AttributeType::Int)
            .with_description("The number of failed attempts before lockout.")
            .with_provider_name("failed_attempts")
            .with_validator(Validator::Between(0, 10)),
        AttributeSchema::new("lockout_time", AttributeType::Int)
            .with_description("The lockout time in minutes.")
            .with_provider_name("lockout_time")
            .with_validator(Validator::Between(0, 60)),
    ])
}

fn method_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("cloud", method_cloud_type())
            .with_provider_name("cloud"),
        AttributeSchema::new("kerberos", method_kerberos_type())
            .with_provider_name("kerberos"),
        AttributeSchema::new("ldap", method_ldap_type())
            .with_provider_name("ldap"),
        AttributeSchema::new("local_database", AttributeType::Flag)
            .with_provider_name("local_database"),
        AttributeSchema::new("radius", method_radius_type())
            .with_provider_name("radius"),
        AttributeSchema::new("saml_idp", method_saml_idp_type())
            .with_provider_name("saml_idp"),
        AttributeSchema::new("tacplus", method_tacplus_type())
            .with_provider_name("tacplus"),
    ])
}

fn method_cloud_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("profile", AttributeType::String)
            .with_description("The tenant profile name.")
            .with_provider_name("profile"),
    ])
}

fn method_kerberos_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("realm", AttributeType::String)
            .with_description("The realm name.")
            .with_provider_name("realm"),
        AttributeSchema::new("server_profile", AttributeType::String)
            .with_description("The server profile.")
            .with_provider_name("server_profile"),
    ])
}

fn method_ldap_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("login_attribute", AttributeType::String)
            .with_description("The login attribute.")
            .with_provider_name("login_attribute"),
        AttributeSchema::new("passwd_exp_days", AttributeType::Int)
            .with_description("Days until the password expires.")
            .with_provider_name("passwd_exp_days"),
        AttributeSchema::new("server_profile", AttributeType::String)
            .with_description("The server profile.")
            .with_provider_name("server_profile"),
    ])
}

fn method_radius_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("checkgroup", AttributeType::Bool)
            .with_description("Retrieve user group from RADIUS.")
            .with_provider_name("checkgroup"),
        AttributeSchema::new("server_profile", AttributeType::String)
            .with_description("The server profile.")
            .with_provider_name("server_profile"),
    ])
}

fn method_saml_idp_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("attribute_name_usergroup", AttributeType::String)
            .with_description("The user group attribute name.")
            .with_provider_name("attribute_name_usergroup")
            .with_validator(Validator::LengthAtMost(63)),
        AttributeSchema::new("attribute_name_username", AttributeType::String)
            .with_description("The username attribute name.")
            .with_provider_name("attribute_name_username")
            .with_validator(Validator::LengthAtMost(63)),
        AttributeSchema::new("certificate_profile", AttributeType::String)
            .with_description("The certificate profile.")
            .with_provider_name("certificate_profile"),
        AttributeSchema::new("enable_single_logout", AttributeType::Bool)
            .with_description("Enable single logout.")
            .with_provider_name("enable_single_logout"),
        AttributeSchema::new("request_signing_certificate", AttributeType::String)
            .with_description("The request signing certificate.")
            .with_provider_name("request_signing_certificate"),
        AttributeSchema::new("server_profile", AttributeType::String)
            .with_description("The server profile.")
            .with_provider_name("server_profile"),
    ])
}

fn method_tacplus_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("checkgroup", AttributeType::Bool)
            .with_description("Retrieve user group from TACACS+.")
            .with_provider_name("checkgroup"),
        AttributeSchema::new("server_profile", AttributeType::String)
            .with_description("The server profile.")
            .with_provider_name("server_profile"),
    ])
}

fn multi_factor_auth_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("factors", AttributeType::List(Box::new(AttributeType::String)))
            .with_description("The additional factors.")
            .with_provider_name("factors"),
        AttributeSchema::new("mfa_enable", AttributeType::Bool)
            .with_description("Enable multi-factor authentication.")
            .with_provider_name("mfa_enable"),
    ])
}

fn single_sign_on_type() -> AttributeType {
    AttributeType::Object(vec![
        AttributeSchema::new("kerberos_keytab", AttributeType::String)
            .with_description("The Kerberos keytab.")
            .with_provider_name("kerberos_keytab")
            .with_validator(Validator::LengthAtMost(8192)),
        AttributeSchema::new("realm", AttributeType::String)
            .with_description("The Kerberos realm.")
            .with_provider_name("realm")
            .with_validator(Validator::LengthAtMost(127)),
        AttributeSchema::new("service_principal", AttributeType::String)
            .with_description("The Kerberos service principal.")
            .with_provider_name("service_principal"),
    ])
}
