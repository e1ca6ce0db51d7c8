//! Page chrome: header navigation, session controls and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. Signing out only clears the session; any protected page
//! on screen then redirects itself to login through its own gate.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::state::auth::AuthSession;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::nav::nav_links_for;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<Arc<AppConfig>>();

    let role = Memo::new(move |_| session.with(AuthSession::role));
    let links = {
        let config = Arc::clone(&config);
        move || {
            nav_links_for(role.get(), &config.role_defaults)
                .into_iter()
                .map(|link| view! { <li><A href=link.href>{link.label}</A></li> })
                .collect_view()
        }
    };
    let display_name = move || session.with(|s| s.display_name().map(str::to_owned)).unwrap_or_default();
    let signed_in = move || role.get().is_some();

    let on_sign_out = {
        let config = Arc::clone(&config);
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let base = config.auth_endpoint.clone();
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::api::sign_out(&base).await {
                        log::warn!("sign-out request failed: {e}");
                    }
                });
            }
            session.set(AuthSession::signed_out());
            notify(toasts, ToastKind::Info, "You have been signed out.", config.toast_duration());
        }
    };

    let site_name = config.site_name.clone();
    let footer = format!("{} · {}", config.site_name, config.tagline);

    view! {
        <header class="app-header">
            <A href="/" attr:class="app-header__brand">{site_name}</A>
            <nav class="app-header__nav" aria-label="Main">
                <ul>{links}</ul>
            </nav>
            <Show when=signed_in>
                <div class="app-header__session">
                    <span class="app-header__user">{display_name}</span>
                    <button type="button" class="app-header__sign-out" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </header>
        <main class="app-main">{children()}</main>
        <footer class="app-footer">{footer}</footer>
    }
}
