//! Typed request and response models for the SASE configuration API
//!
//! Union fields, where the API expects exactly one of several keys, are
//! externally tagged enums. An empty JSON object selects a variant that
//! carries no data, e.g. `{"alert": {}}`.

/// Implement `ApiObject` for a model with an `object_id` field
macro_rules! api_object {
    ($model:ty, $path:expr) => {
        impl $crate::client::ApiObject for $model {
            const PATH: &'static str = $path;

            fn object_id(&self) -> Option<&str> {
                self.object_id.as_deref()
            }
        }
    };
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

use serde::{Deserialize, Serialize};

pub use addresses::Address;
pub use anti_spyware_profiles::AntiSpywareProfile;
pub use anti_spyware_signatures::AntiSpywareSignature;
pub use app_override_rules::AppOverrideRule;
pub use authentication_profiles::AuthenticationProfile;
pub use bandwidth_allocations::BandwidthAllocation;
pub use bgp_routing::BgpRouting;
pub use file_blocking_profiles::FileBlockingProfile;
pub use http_header_profiles::HttpHeaderProfile;
pub use ipsec_crypto_profiles::IpsecCryptoProfile;
pub use mobile_agent_authentication_settings::MobileAgentAuthenticationSetting;
pub use url_access_profiles::UrlAccessProfile;

/// Presence marker serialized as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
