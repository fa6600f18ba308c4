//! Prisma SASE Provider
//!
//! Manages Prisma SASE configuration objects through the SASE config API.
//!
//! ## Module Structure
//!
//! - `client` - Authenticated HTTP client and typed CRUD services
//! - `config` - Provider settings from the provider block, environment and auth file
//! - `mapper` - Conversion between attribute maps and API models
//! - `models` - API request and response models
//! - `resources` - Resources and data sources built on the client
//! - `schemas` - Auto-generated object schemas plus identifying attributes
//! - `provider` - SaseProvider implementation

pub mod client;
pub mod config;
pub mod mapper;
pub mod models;
pub mod provider;
pub mod resources;
pub mod schemas;

// Re-export main types
pub use client::{ApiError, SaseClient};
pub use config::{ClientConfig, ConfigError, LogCategories, ProviderConfig};
pub use provider::SaseProvider;
