//! Role-based access gate for protected pages.
//!
//! This crate is UI-framework agnostic so the Leptos client (and anything
//! else that needs the same routing decision) can consume it directly.
//!
//! ARCHITECTURE
//! ============
//! - `role`: the closed set of platform roles.
//! - `auth`: resolution state published by the external auth resolver.
//! - `policy`: per-page allowed roles and the role -> default destination table.
//! - `decide`: the pure decision function producing an [`Outcome`].
//! - `gate`: redirect de-duplication, teardown, and the [`Navigator`] seam.

pub mod auth;
pub mod decide;
pub mod gate;
pub mod policy;
pub mod role;

pub use auth::{AuthState, Identity};
pub use decide::{Outcome, decide};
pub use gate::{AccessGate, Navigator, RedirectLatch};
pub use policy::{AccessPolicy, RoleDefaultMap};
pub use role::{Role, RoleParseError};

/// Destination for visitors whose session resolved without an identity.
pub const LOGIN_PATH: &str = "/login";

/// Destination for a denied role with no override and no table entry.
pub const FALLBACK_PATH: &str = "/dashboard";
