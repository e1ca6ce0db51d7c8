//! The access decision.
//!
//! Rules, first match wins:
//! 1. resolution pending -> `Loading`
//! 2. signed out -> redirect to `/login`
//! 3. role not allowed -> redirect to the override, else the role's default
//!    page, else `/dashboard`
//! 4. otherwise -> `Allow`

#[cfg(test)]
#[path = "decide_test.rs"]
mod decide_test;

use crate::auth::AuthState;
use crate::policy::{AccessPolicy, RoleDefaultMap};
use crate::role::Role;
use crate::{FALLBACK_PATH, LOGIN_PATH};

/// What a protected page should do for the current auth snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Loading,
    RedirectTo(String),
    Allow,
}

impl Outcome {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    #[must_use]
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::RedirectTo(path) => Some(path),
            Self::Loading | Self::Allow => None,
        }
    }
}

/// Decide what to render for `auth` on a page guarded by `policy`.
///
/// Total over its inputs and free of side effects; navigation is the caller's
/// job (see [`crate::gate::AccessGate`]).
#[must_use]
pub fn decide(auth: &AuthState, policy: &AccessPolicy, defaults: &RoleDefaultMap) -> Outcome {
    match auth {
        AuthState::Pending => Outcome::Loading,
        AuthState::SignedOut => Outcome::RedirectTo(LOGIN_PATH.to_owned()),
        AuthState::SignedIn(identity) if policy.allows(identity.role) => Outcome::Allow,
        AuthState::SignedIn(identity) => {
            Outcome::RedirectTo(denied_destination(identity.role, policy, defaults).to_owned())
        }
    }
}

fn denied_destination<'a>(role: Role, policy: &'a AccessPolicy, defaults: &'a RoleDefaultMap) -> &'a str {
    policy
        .override_redirect()
        .or_else(|| defaults.get(role))
        .unwrap_or(FALLBACK_PATH)
}
