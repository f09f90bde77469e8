//! # parlor_core
//!
//! Core domain logic for Parlor: the agent catalog and router, conversation
//! models, the store adapter, and the conversation service.

pub mod agents;
pub mod conversations;
pub mod migrate;
pub mod models;
pub mod store;
pub mod uuid;
pub mod validation;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
