//! Authentication session and the resolver that fills it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<AuthSession>` that starts `Pending`. The
//! resolver asks the provider who is signed in and publishes exactly one
//! resolution; login, signup and sign-out replace the session afterwards.
//! Access gates only read `status`.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures and unknown roles collapse to signed out and are logged.
//! The gate never sees an error, only the resulting redirect to login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::sync::Arc;

use gate::{AuthState, Role};
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api::{self, AuthError};
use crate::net::types::SessionUser;
use crate::util::admin::effective_role;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub status: AuthState,
    pub user: Option<SessionUser>,
}

impl AuthSession {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn signed_out() -> Self {
        Self { status: AuthState::SignedOut, user: None }
    }

    pub fn signed_in(user: SessionUser, role: Role) -> Self {
        Self { status: AuthState::signed_in(role), user: Some(user) }
    }

    pub fn role(&self) -> Option<Role> {
        self.status.role()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(SessionUser::display_name)
    }

    /// Session for a user the provider just returned, with the admin list
    /// applied. Unknown roles sign the user out.
    pub fn for_user(user: SessionUser, config: &AppConfig) -> Self {
        match user.parsed_role() {
            Ok(claimed) => {
                let role = effective_role(claimed, &user.email, &config.admin_emails);
                if role != claimed {
                    log::info!("{} promoted to {role} by admin list", user.email);
                }
                Self::signed_in(user, role)
            }
            Err(e) => {
                log::warn!("signing out {}: {}", user.id, AuthError::from(e));
                Self::signed_out()
            }
        }
    }
}

/// Turn the outcome of one resolver call into a session.
pub fn session_from_resolution(result: Result<Option<SessionUser>, AuthError>, config: &AppConfig) -> AuthSession {
    match result {
        Ok(Some(user)) => AuthSession::for_user(user, config),
        Ok(None) => AuthSession::signed_out(),
        Err(e) => {
            log::warn!("auth resolution failed: {e}");
            AuthSession::signed_out()
        }
    }
}

/// Source of the current user.
pub trait AuthResolver {
    fn resolve(&self) -> impl Future<Output = Result<Option<SessionUser>, AuthError>>;
}

/// Resolver backed by `GET {auth_endpoint}/me`.
#[derive(Clone, Debug)]
pub struct HttpAuthResolver {
    base: String,
}

impl HttpAuthResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl AuthResolver for HttpAuthResolver {
    async fn resolve(&self) -> Result<Option<SessionUser>, AuthError> {
        api::fetch_current_user(&self.base).await
    }
}

/// Resolve the session once in the browser and publish it to `session`.
///
/// Under SSR nothing runs and the session stays pending, so protected pages
/// render their loading placeholder until hydration.
pub fn install_auth_resolver<R>(session: RwSignal<AuthSession>, resolver: R, config: Arc<AppConfig>)
where
    R: AuthResolver + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = resolver.resolve().await;
        let resolved = session_from_resolution(result, &config);
        log::debug!("session resolved: {:?}", resolved.role());
        session.set(resolved);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resolver, config);
    }
}
