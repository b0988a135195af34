use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shared::SiteConfig;

use crate::pages::HomePage;

/// Contact number override, read when the bundle is compiled
const WHATSAPP_NUMBER: Option<&str> = option_env!("WHATSAPP_NUMBER");

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Resolved once here and handed down through context
    let site = SiteConfig::bundled_or_default(WHATSAPP_NUMBER);
    log::info!("{} landing page, contact via {}", site.brand_name, site.channel.name());

    let title = site.title.clone();
    let description = site.description.clone();
    provide_context(site);

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Router>
            <Routes fallback=|| view! { <p class="p-8 text-center">"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
