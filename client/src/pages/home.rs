//! Public landing page.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::meta::PageMeta;
use crate::state::auth::AuthSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let config = expect_context::<Arc<AppConfig>>();

    let workspace = Memo::new({
        let config = Arc::clone(&config);
        move |_| {
            session
                .with(AuthSession::role)
                .map(|role| config.role_defaults.destination_for(role).to_owned())
        }
    });

    view! {
        <PageMeta title=""/>
        <section class="hero">
            <h1 class="hero__title">{config.site_name.clone()}</h1>
            <p class="hero__tagline">{config.tagline.clone()}</p>
            <div class="hero__actions">
                {move || match workspace.get() {
                    Some(path) => view! { <A href=path>"Open your dashboard"</A> }.into_any(),
                    None => view! {
                        <A href="/signup">"Get started"</A>
                        <A href="/login">"Log in"</A>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
