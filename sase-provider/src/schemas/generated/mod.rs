//! Auto-generated Prisma SASE object schemas
//!
//! DO NOT EDIT MANUALLY - regenerate with:
//!   sase-codegen --file openapi.json --schema <component> --type-name sase_<name>

use sase_core::schema::ResourceSchema;

/// Where an object lives, which decides its identifying attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Stored in a folder: ID `folder:object_id`
    Folder,
    /// Rule stored in a folder before or after other rules: ID `position:folder:object_id`
    Position,
    /// Not stored in a folder
    Global,
}

/// SASE schema configuration
///
/// Combines the generated ResourceSchema with the metadata needed to
/// register its resource and data sources.
#[derive(Debug, Clone)]
pub struct SaseSchemaConfig {
    /// Terraform type name of the resource and single data source (e.g., "sase_addresses")
    pub type_name: &'static str,
    /// Terraform type name of the list data source
    pub list_type_name: &'static str,
    pub scope: Scope,
    /// Object attributes only; identifying attributes are added per schema kind
    pub schema: ResourceSchema,
}

pub mod addresses;
pub mod anti_spyware_profiles;
pub mod anti_spyware_signatures;
pub mod app_override_rules;
pub mod authentication_profiles;
pub mod bandwidth_allocations;
pub mod bgp_routing;
pub mod file_blocking_profiles;
pub mod http_header_profiles;
pub mod ipsec_crypto_profiles;
pub mod mobile_agent_authentication_settings;
pub mod url_access_profiles;

/// Returns all generated schema configs
pub fn configs() -> Vec<SaseSchemaConfig> {
    vec![
        addresses::addresses_config(),
        anti_spyware_profiles::anti_spyware_profiles_config(),
        anti_spyware_signatures::anti_spyware_signatures_config(),
        app_override_rules::app_override_rules_config(),
        authentication_profiles::authentication_profiles_config(),
        bandwidth_allocations::bandwidth_allocations_config(),
        bgp_routing::bgp_routing_config(),
        file_blocking_profiles::file_blocking_profiles_config(),
        http_header_profiles::http_header_profiles_config(),
        ipsec_crypto_profiles::ipsec_crypto_profiles_config(),
        mobile_agent_authentication_settings::mobile_agent_authentication_settings_config(),
        url_access_profiles::url_access_profiles_config(),
    ]
}
