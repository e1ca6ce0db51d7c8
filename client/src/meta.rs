//! Per-page document title and description.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::config::AppConfig;

/// `"Page | Site"`, or just the site name for an untitled page.
pub fn page_title(page: &str, site: &str) -> String {
    let page = page.trim();
    if page.is_empty() { site.to_owned() } else { format!("{page} | {site}") }
}

/// Sets `<title>` and the description meta tag for the current page. The
/// description defaults to the configured tagline.
#[component]
pub fn PageMeta(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    let config = expect_context::<Arc<AppConfig>>();
    let text = page_title(&title, &config.site_name);
    let description = description.unwrap_or_else(|| config.tagline.clone());

    view! {
        <Title text=text/>
        <Meta name="description" content=description/>
    }
}
