//! claim-remap CLI library
//!
//! Hosts the claim remapping editor over an OIDC client record stored as
//! JSON. The binary in main.rs only parses arguments and dispatches; the
//! modules are exposed here for integration testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
