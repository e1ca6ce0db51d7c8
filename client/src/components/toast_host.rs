//! Renders the toast queue in a fixed live region.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.with(|state| state.items.clone())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier()) role=toast.kind.aria_role()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast__dismiss"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    toasts.update(|state| {
                                        state.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
