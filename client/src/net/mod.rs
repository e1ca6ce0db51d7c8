//! Networking modules for the external auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON bodies exchanged
//! with the provider.

pub mod api;
pub mod types;
