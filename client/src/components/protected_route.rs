//! Route wrapper that only renders its children for permitted roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in `ProtectedRoute` with the roles allowed to see
//! it. The decision itself lives in the `gate` crate; this component connects
//! it to the session signal, the router and the component lifecycle.
//!
//! DESIGN
//! ======
//! - A `Memo` over the session status re-runs `decide` only when the auth
//!   snapshot changes, so unrelated session edits do not re-render children.
//! - An `Effect` feeds each new outcome through the gate's redirect latch and
//!   navigates only when the latch releases a path. The path is taken out of
//!   the stored gate before navigating, because navigation may unmount this
//!   component synchronously.
//! - `on_cleanup` tears the gate down so a late resolution cannot redirect
//!   from a page the user already left.
//!
//! This is a UX guard. The auth provider and any data API must still check
//! the session themselves.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use std::sync::Arc;

use gate::{AccessGate, AccessPolicy, Navigator, Outcome, Role};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_screen::LoadingScreen;
use crate::config::AppConfig;
use crate::state::auth::AuthSession;

/// Build the policy for a page from its props.
pub fn policy_for(allowed_roles: Vec<Role>, redirect_to: Option<String>) -> AccessPolicy {
    let policy = AccessPolicy::new(allowed_roles);
    match redirect_to.filter(|path| !path.trim().is_empty()) {
        Some(path) => policy.with_redirect(path),
        None => policy,
    }
}

/// Feed one outcome through the stored gate's latch and navigate when it
/// releases a path. Does nothing once the gate is torn down or disposed.
pub(crate) fn forward_outcome<N>(gate: StoredValue<AccessGate>, outcome: &Outcome, navigator: &N) -> Option<String>
where
    N: Navigator + ?Sized,
{
    let path = gate.try_update_value(|g| g.observe(outcome)).flatten()?;
    log::info!("access gate redirecting to {path}");
    navigator.navigate_to(&path);
    Some(path)
}

/// Tear `gate` down when the current owner is cleaned up.
pub(crate) fn teardown_on_cleanup(gate: StoredValue<AccessGate>) {
    on_cleanup(move || {
        gate.try_update_value(AccessGate::teardown);
    });
}

#[component]
pub fn ProtectedRoute(
    #[prop(into)] allowed_roles: Vec<Role>,
    /// Where to send signed-in users whose role is not allowed. Defaults to
    /// the role's home page.
    #[prop(optional, into)]
    redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let config = expect_context::<Arc<AppConfig>>();
    let navigate = use_navigate();

    let policy = policy_for(allowed_roles, redirect_to);
    let gate = StoredValue::new(AccessGate::new(config.role_defaults.clone()));

    let status = Memo::new(move |_| session.with(|s| s.status));
    let outcome = Memo::new(move |_| {
        let auth = status.get();
        gate.with_value(|g| g.decide(&auth, &policy))
    });

    let navigator = move |path: &str| {
        navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };
    Effect::new(move || {
        forward_outcome(gate, &outcome.get(), &navigator);
    });
    teardown_on_cleanup(gate);

    view! {
        <Show when=move || outcome.get().is_allowed() fallback=|| view! { <LoadingScreen/> }>
            {children()}
        </Show>
    }
}
