//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::components::toast_host::ToastHost;
use crate::config::AppConfig;
use crate::pages::{
    admin::AdminPage,
    dashboard::{DashboardPage, LecturerDashboardPage, StudentDashboardPage},
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    signup::SignupPage,
};
use crate::state::auth::{AuthSession, HttpAuthResolver, install_auth_resolver};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads configuration, provides the shared contexts, starts session
/// resolution and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = Arc::new(AppConfig::load());
    let session = RwSignal::new(AuthSession::pending());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(Arc::clone(&config));
    provide_context(session);
    provide_context(toasts);

    install_auth_resolver(session, HttpAuthResolver::new(config.auth_endpoint.clone()), config);

    view! {
        <Router>
            <AppShell>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("student"), StaticSegment("dashboard")) view=StudentDashboardPage/>
                    <Route path=(StaticSegment("lecturer"), StaticSegment("dashboard")) view=LecturerDashboardPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </AppShell>
            <ToastHost/>
        </Router>
    }
}
