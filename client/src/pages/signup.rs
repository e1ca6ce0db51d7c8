//! Account creation page.
//!
//! Visitors choose between the student and lecturer roles. Administrators are
//! never self-service; they come from the configured admin list.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::Arc;

use gate::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::form_field::FormField;
use crate::components::password_field::PasswordField;
use crate::config::AppConfig;
use crate::meta::PageMeta;
use crate::pages::login::install_signed_in_redirect;
use crate::state::auth::AuthSession;
use crate::state::toast::ToastState;
use crate::util::validation::{Field, FieldErrors, SELF_SERVICE_ROLES, SignupForm};

/// `(value, label)` pairs for the role picker.
pub fn role_options() -> Vec<(&'static str, &'static str)> {
    SELF_SERVICE_ROLES.iter().map(|role| (role.as_str(), role.label())).collect()
}

pub fn account_created_message(full_name: &str, site_name: &str) -> String {
    let first = full_name.split_whitespace().next().unwrap_or(full_name);
    format!("Welcome to {site_name}, {first}! Your account is ready.")
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<Arc<AppConfig>>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student.as_str().to_owned());
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
            let form = SignupForm {
                full_name: full_name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
                role: role.get_untracked(),
            };
            let data = match form.validate() {
                Ok(data) => data,
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
                use crate::net::types::SignupRequest;
                use crate::state::toast::{ToastKind, notify};

                let config = Arc::clone(&config);
                let greeting = account_created_message(&data.full_name, &config.site_name);
                leptos::task::spawn_local(async move {
                    match api::sign_up(&config.auth_endpoint, &SignupRequest::from(data)).await {
                        Ok(user) => {
                            let next = AuthSession::for_user(user, &config);
                            notify(toasts, ToastKind::Success, greeting, config.toast_duration());
                            session.set(next);
                        }
                        Err(e) => {
                            log::warn!("sign-up failed: {e}");
                            form_error.set(Some(e.user_message().to_owned()));
                            notify(toasts, ToastKind::Error, e.user_message(), config.toast_duration());
                        }
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (data, &config, toasts);
            }
        }
    };

    let field_error = move |field: Field| Signal::derive(move || errors.with(|e| e.message(field)));

    view! {
        <PageMeta title="Sign up" description=format!("Create your {} account.", config.site_name)/>
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        name=Field::FullName.name()
                        label="Full name"
                        value=full_name
                        error=field_error(Field::FullName)
                        autocomplete="name"
                    />
                    <FormField
                        name=Field::Email.name()
                        label="Email"
                        value=email
                        error=field_error(Field::Email)
                        input_type="email"
                        autocomplete="email"
                    />
                    <PasswordField
                        name=Field::Password.name()
                        label="Password"
                        value=password
                        error=field_error(Field::Password)
                        show_strength=true
                        autocomplete="new-password"
                    />
                    <PasswordField
                        name=Field::ConfirmPassword.name()
                        label="Confirm password"
                        value=confirm_password
                        error=field_error(Field::ConfirmPassword)
                        autocomplete="new-password"
                    />
                    <fieldset class="form-field form-field--role">
                        <legend class="form-field__label">"I am a"</legend>
                        {role_options()
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <label class="role-option">
                                        <input
                                            type="radio"
                                            name=Field::Role.name()
                                            value=value
                                            prop:checked=move || role.with(|r| r == value)
                                            on:change=move |_| role.set(value.to_owned())
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                        <Show when=move || errors.with(|e| e.get(Field::Role).is_some())>
                            <p class="form-field__error" role="alert">
                                {move || errors.with(|e| e.message(Field::Role)).unwrap_or_default()}
                            </p>
                        </Show>
                    </fieldset>
                    <Show when=move || form_error.with(Option::is_some)>
                        <p class="auth-form__error" role="alert">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </section>
    }
}
