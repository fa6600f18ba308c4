//! Resource and data source registry
//!
//! Generic objects are registered from their schema config and model type.
//! Bandwidth allocations and BGP routing have their own implementations.

pub mod bandwidth_allocations;
pub mod bgp_routing;
pub mod object;

use sase_core::provider::{DataSource, Resource};

use crate::client::SaseClient;
use crate::models;
use crate::schemas::generated;

pub use bandwidth_allocations::BandwidthAllocationResource;
pub use bgp_routing::{BgpRoutingDataSource, BgpRoutingResource};
pub use object::{ObjectDataSource, ObjectListDataSource, ObjectResource};

/// Expands to the list of `(model, config fn)` pairs for every UUID-keyed object
macro_rules! for_each_object {
    ($callback:ident!($($arg:tt)*)) => {
        $callback!(
            $($arg)*;
            models::Address => generated::addresses::addresses_config,
            models::AntiSpywareProfile => generated::anti_spyware_profiles::anti_spyware_profiles_config,
            models::AntiSpywareSignature => generated::anti_spyware_signatures::anti_spyware_signatures_config,
            models::AppOverrideRule => generated::app_override_rules::app_override_rules_config,
            models::AuthenticationProfile => generated::authentication_profiles::authentication_profiles_config,
            models::FileBlockingProfile => generated::file_blocking_profiles::file_blocking_profiles_config,
            models::HttpHeaderProfile => generated::http_header_profiles::http_header_profiles_config,
            models::IpsecCryptoProfile => generated::ipsec_crypto_profiles::ipsec_crypto_profiles_config,
            models::MobileAgentAuthenticationSetting =>
                generated::mobile_agent_authentication_settings::mobile_agent_authentication_settings_config,
            models::UrlAccessProfile => generated::url_access_profiles::url_access_profiles_config
        )
    };
}

macro_rules! object_resources {
    ($client:expr; $($model:ty => $config:path),+) => {
        vec![$(
            Box::new(ObjectResource::<$model>::new($client.clone(), $config()))
                as Box<dyn Resource>
        ),+]
    };
}

macro_rules! object_data_sources {
    ($client:expr; $($model:ty => $config:path),+) => {{
        let mut sources: Vec<Box<dyn DataSource>> = Vec::new();
        $(
            sources.push(Box::new(ObjectDataSource::<$model>::new($client.clone(), $config())));
            sources.push(Box::new(ObjectListDataSource::<$model>::new($client.clone(), $config())));
        )+
        sources
    }};
}

/// All managed resource types
pub fn resources(client: &SaseClient) -> Vec<Box<dyn Resource>> {
    let mut resources: Vec<Box<dyn Resource>> = for_each_object!(object_resources!(client));
    resources.push(Box::new(BandwidthAllocationResource::new(client.clone())));
    resources.push(Box::new(BgpRoutingResource::new(client.clone())));
    resources
}

/// All data sources
pub fn data_sources(client: &SaseClient) -> Vec<Box<dyn DataSource>> {
    let mut sources = for_each_object!(object_data_sources!(client));
    sources.push(Box::new(ObjectListDataSource::<models::BandwidthAllocation>::new(
        client.clone(),
        generated::bandwidth_allocations::bandwidth_allocations_config(),
    )));
    sources.push(Box::new(BgpRoutingDataSource::new(client.clone())));
    sources
}
