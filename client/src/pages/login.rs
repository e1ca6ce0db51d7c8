//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the page publishes the new session; an effect then sends the
//! user to their role's home page. The same effect moves visitors who are
//! already signed in straight past the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use gate::{Outcome, RedirectLatch, RoleDefaultMap};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::password_field::PasswordField;
use crate::config::AppConfig;
use crate::meta::PageMeta;
use crate::state::auth::AuthSession;
use crate::state::toast::ToastState;
use crate::util::validation::{Field, FieldErrors, LoginForm};

/// Home page for a signed-in session, `None` while pending or signed out.
pub fn post_login_destination(session: &AuthSession, defaults: &RoleDefaultMap) -> Option<String> {
    session.role().map(|role| defaults.destination_for(role).to_owned())
}

pub fn welcome_message(session: &AuthSession) -> String {
    match session.display_name() {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

/// `RedirectTo` the role's home page once signed in, otherwise stay on the form.
pub fn signed_in_outcome(session: &AuthSession, defaults: &RoleDefaultMap) -> Outcome {
    post_login_destination(session, defaults).map_or(Outcome::Allow, Outcome::RedirectTo)
}

/// Send signed-in sessions to their home page, once per sign-in.
pub(crate) fn install_signed_in_redirect(session: RwSignal<AuthSession>, defaults: RoleDefaultMap) {
    let navigate = use_navigate();
    let latch = StoredValue::new(RedirectLatch::default());
    let outcome = Memo::new(move |_| session.with(|s| signed_in_outcome(s, &defaults)));

    Effect::new(move || {
        let current = outcome.get();
        if let Some(path) = latch.try_update_value(|l| l.observe(&current)).flatten() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    on_cleanup(move || {
        latch.try_update_value(RedirectLatch::teardown);
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<Arc<AppConfig>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_signed_in_redirect(session, config.role_defaults.clone());

    let on_submit = {
        let config = Arc::clone(&config);
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
            let credentials = match form.validate() {
                Ok(credentials) => credentials,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::default());
            form_error.set(None);
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                use crate::net::api;
                use crate::net::types::LoginRequest;
                use crate::state::toast::{ToastKind, notify};

                let config = Arc::clone(&config);
                leptos::task::spawn_local(async move {
                    match api::sign_in(&config.auth_endpoint, &LoginRequest::from(credentials)).await {
                        Ok(user) => {
                            let next = AuthSession::for_user(user, &config);
                            if next.role().is_some() {
                                notify(toasts, ToastKind::Success, welcome_message(&next), config.toast_duration());
                            } else {
                                form_error.set(Some(crate::util::auth_errors::AuthErrorCode::Unknown.friendly_message().to_owned()));
                            }
                            session.set(next);
                        }
                        Err(e) => {
                            log::warn!("sign-in failed: {e}");
                            form_error.set(Some(e.user_message().to_owned()));
                            notify(toasts, ToastKind::Error, e.user_message(), config.toast_duration());
                        }
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (credentials, &config, toasts);
            }
        }
    };

    view! {
        <PageMeta title="Log in"/>
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <p class="auth-card__subtitle">{config.tagline.clone()}</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        name=Field::Email.name()
                        label="Email"
                        value=email
                        error=Signal::derive(move || errors.with(|e| e.message(Field::Email)))
                        input_type="email"
                        autocomplete="email"
                        placeholder="you@university.edu"
                    />
                    <PasswordField
                        name=Field::Password.name()
                        label="Password"
                        value=password
                        error=Signal::derive(move || errors.with(|e| e.message(Field::Password)))
                    />
                    <Show when=move || form_error.with(Option::is_some)>
                        <p class="auth-form__error" role="alert">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </section>
    }
}
