//! Administrator overview of access configuration.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::sync::Arc;

use gate::{Role, RoleDefaultMap};
use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::config::AppConfig;
use crate::meta::PageMeta;

/// `(role label, home page)` rows, one per role, in role order. Roles without
/// an entry show the fallback page.
pub fn role_table_rows(defaults: &RoleDefaultMap) -> Vec<(&'static str, String)> {
    Role::ALL
        .into_iter()
        .map(|role| (role.label(), defaults.destination_for(role).to_owned()))
        .collect()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<Arc<AppConfig>>();
    let rows = role_table_rows(&config.role_defaults);
    let admins = StoredValue::new(config.admin_emails.clone());

    view! {
        <PageMeta title="Admin"/>
        <ProtectedRoute allowed_roles=vec![Role::Admin]>
            <section class="admin">
                <h1>"Administration"</h1>
                <h2>"Role home pages"</h2>
                <table class="admin__roles">
                    <thead>
                        <tr>
                            <th scope="col">"Role"</th>
                            <th scope="col">"Home page"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .iter()
                            .map(|(label, path)| view! { <tr><td>{*label}</td><td><code>{path.clone()}</code></td></tr> })
                            .collect_view()}
                    </tbody>
                </table>
                <h2>"Administrator accounts"</h2>
                <Show
                    when=move || !admins.with_value(Vec::is_empty)
                    fallback=|| view! { <p>"No administrator accounts are configured."</p> }
                >
                    <ul class="admin__accounts">
                        {admins.with_value(|emails| {
                            emails.iter().map(|email| view! { <li>{email.clone()}</li> }).collect_view()
                        })}
                    </ul>
                </Show>
            </section>
        </ProtectedRoute>
    }
}
