//! Password input with a visibility toggle and optional strength meter.

use leptos::prelude::*;

use crate::components::form_field::{error_id, input_class, input_id};
use crate::util::password_strength::{Requirement, evaluate};

#[component]
pub fn PasswordField(
    name: &'static str,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    /// Show the strength meter and unmet requirements while typing.
    #[prop(optional)]
    show_strength: bool,
    #[prop(default = "current-password")] autocomplete: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let has_error = move || error.with(Option::is_some);
    let strength = Memo::new(move |_| value.with(|password| evaluate(password)));

    let meter = move || {
        let current = strength.get();
        let unmet: Vec<Requirement> = current.unmet();
        view! {
            <div class="password-strength" aria-live="polite">
                <div class="password-strength__track">
                    <div
                        class=format!("password-strength__bar {}", current.level.css_modifier())
                        style=format!("width: {}%", current.percent())
                    ></div>
                </div>
                <span class="password-strength__label">{current.level.label()}</span>
                <ul class="password-strength__hints">
                    {unmet.into_iter().map(|req| view! { <li>{req.hint()}</li> }).collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <div class="form-field form-field--password">
            <label class="form-field__label" for=input_id(name)>{label}</label>
            <div class="password-field">
                <input
                    id=input_id(name)
                    name=name
                    type=move || if visible.get() { "text" } else { "password" }
                    class=move || input_class(has_error())
                    autocomplete=autocomplete
                    aria-invalid=move || has_error().to_string()
                    aria-describedby=move || has_error().then(|| error_id(name))
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-field__toggle"
                    aria-pressed=move || visible.get().to_string()
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            <Show when=move || show_strength && !value.with(String::is_empty)>
                {meter}
            </Show>
            <Show when=has_error>
                <p id=error_id(name) class="form-field__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
