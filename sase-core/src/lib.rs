//! SASE Core
//!
//! Schema, state and lifecycle core shared by the SASE provider and its tools

pub mod diagnostics;
pub mod id;
pub mod lifecycle;
pub mod plan;
pub mod provider;
pub mod resource;
pub mod schema;
