//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::meta::PageMeta;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageMeta title="Page not found"/>
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you asked for does not exist."</p>
            <A href="/">"Back to the home page"</A>
        </section>
    }
}
