//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Each model is a plain struct held in an `RwSignal` provided from `App`, so
//! the transition logic is tested without a reactive runtime.

pub mod auth;
pub mod toast;
