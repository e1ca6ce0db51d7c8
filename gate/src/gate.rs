//! Redirect dispatch for the access decision.
//!
//! DESIGN
//! ======
//! `decide` is re-run on every auth or policy change, so the same redirect
//! outcome is usually observed many times in a row. `RedirectLatch` turns
//! that stream of outcomes into at most one navigation per transition into a
//! redirect, and goes permanently quiet once the hosting page is torn down.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::auth::AuthState;
use crate::decide::{Outcome, decide};
use crate::policy::{AccessPolicy, RoleDefaultMap};

/// Performs a client-side redirect. Fire-and-forget.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Remembers the redirect already requested so repeated identical outcomes
/// do not navigate again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    requested: Option<String>,
    torn_down: bool,
}

impl RedirectLatch {
    /// Feed the latest outcome; returns the path to navigate to, if any.
    pub fn observe(&mut self, outcome: &Outcome) -> Option<String> {
        if self.torn_down {
            return None;
        }
        match outcome {
            Outcome::RedirectTo(path) if self.requested.as_deref() == Some(path.as_str()) => None,
            Outcome::RedirectTo(path) => {
                self.requested = Some(path.clone());
                Some(path.clone())
            }
            Outcome::Loading | Outcome::Allow => {
                self.requested = None;
                None
            }
        }
    }

    /// Discard anything pending; later outcomes never navigate.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.requested = None;
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }
}

/// Access decision plus redirect de-duplication for one page activation.
#[derive(Clone, Debug, Default)]
pub struct AccessGate {
    defaults: RoleDefaultMap,
    latch: RedirectLatch,
}

impl AccessGate {
    #[must_use]
    pub fn new(defaults: RoleDefaultMap) -> Self {
        Self { defaults, latch: RedirectLatch::default() }
    }

    #[must_use]
    pub fn defaults(&self) -> &RoleDefaultMap {
        &self.defaults
    }

    #[must_use]
    pub fn decide(&self, auth: &AuthState, policy: &AccessPolicy) -> Outcome {
        decide(auth, policy, &self.defaults)
    }

    /// Latch an already computed outcome; returns the path to navigate to.
    pub fn observe(&mut self, outcome: &Outcome) -> Option<String> {
        self.latch.observe(outcome)
    }

    /// Decide, then navigate when the outcome newly became a redirect.
    pub fn evaluate<N>(&mut self, auth: &AuthState, policy: &AccessPolicy, navigator: &N) -> Outcome
    where
        N: Navigator + ?Sized,
    {
        let outcome = self.decide(auth, policy);
        if let Some(path) = self.latch.observe(&outcome) {
            navigator.navigate_to(&path);
        }
        outcome
    }

    pub fn teardown(&mut self) {
        self.latch.teardown();
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.latch.is_torn_down()
    }
}
