//! Neutral placeholder shown while the gate is undecided or redirecting.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <span class="loading-screen__spinner" aria-hidden="true"></span>
            <span class="loading-screen__label">"Loading..."</span>
        </div>
    }
}
