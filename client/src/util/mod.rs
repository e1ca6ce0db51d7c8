//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain Rust with no reactive or browser dependency, so
//! form rules, role lookups and error copy are unit tested natively.

pub mod admin;
pub mod auth_errors;
pub mod nav;
pub mod password_strength;
pub mod validation;
