//! Authentication resolution state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the external auth resolver; the gate only reads it. A page
//! activation starts at `Pending` and settles exactly once into `SignedOut`
//! or `SignedIn`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The resolved user as far as access decisions are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self { role }
    }
}

/// Where the auth resolver currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Resolution still in flight.
    #[default]
    Pending,
    /// Resolved with no usable identity. Resolver failures also land here.
    SignedOut,
    /// Resolved to an identity.
    SignedIn(Identity),
}

impl AuthState {
    #[must_use]
    pub const fn signed_in(role: Role) -> Self {
        Self::SignedIn(Identity::new(role))
    }

    /// Build a state from the loose `{loading, isAuthenticated, identity}`
    /// triple a resolver publishes.
    ///
    /// `loading` wins over everything else, and an authenticated flag
    /// without an identity counts as signed out.
    #[must_use]
    pub fn from_parts(loading: bool, is_authenticated: bool, identity: Option<Identity>) -> Self {
        if loading {
            return Self::Pending;
        }
        match (is_authenticated, identity) {
            (true, Some(identity)) => Self::SignedIn(identity),
            _ => Self::SignedOut,
        }
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::Pending | Self::SignedOut => None,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }
}
