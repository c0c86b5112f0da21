// Github CLI Landing Page — Leptos 0.8 Edition

mod components;
mod logging;
mod sections;

use components::Separator;
use gh_showcase::SiteConfig;
use leptos::prelude::*;
use sections::*;
use tracing::{info, warn};

/// Site copy and carousel settings, baked in at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let parsed = SiteConfig::from_toml(SITE_TOML);
    let level = parsed
        .as_ref()
        .map(|config| config.log_level.as_str())
        .unwrap_or("info");
    logging::init(level);

    let site = parsed.unwrap_or_else(|e| {
        warn!("site.toml rejected, using defaults: {}", e);
        SiteConfig::default()
    });
    info!(name = %site.name, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App site=site /> });
}

#[component]
fn App(site: SiteConfig) -> impl IntoView {
    let doc = document();
    doc.set_title(&site.name);
    if let Ok(Some(meta)) = doc.query_selector("meta[name=\"description\"]") {
        let _ = meta.set_attribute("content", &site.description);
    }
    provide_context(site);

    view! {
        <div class="desktop-only">
            <Nav />
            <main>
                <Hero />
                <Separator />
                <Features />
            </main>
            <Footer />
        </div>
        <MobileNotice />
    }
}
