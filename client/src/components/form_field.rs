//! Labeled text input with an inline error message.
//!
//! Inputs and their error text are linked with `aria-describedby` so screen
//! readers announce the message when the field is focused.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

pub fn input_id(name: &str) -> String {
    format!("field-{name}")
}

pub fn error_id(name: &str) -> String {
    format!("field-{name}-error")
}

pub fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-field__input form-field__input--error" } else { "form-field__input" }
}

#[component]
pub fn FormField(
    /// Form key; also used to derive element ids.
    name: &'static str,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let has_error = move || error.with(Option::is_some);

    view! {
        <div class="form-field">
            <label class="form-field__label" for=input_id(name)>{label}</label>
            <input
                id=input_id(name)
                name=name
                type=input_type
                class=move || input_class(has_error())
                autocomplete=autocomplete
                placeholder=placeholder
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || has_error().then(|| error_id(name))
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=has_error>
                <p id=error_id(name) class="form-field__error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
