//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's orchestration. Protected pages wrap their body
//! in `ProtectedRoute` and delegate rendering details to `components`.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
