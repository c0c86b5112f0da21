use leptos::prelude::*;

/// Shown instead of the page on narrow viewports (see `.mobile-only` in
/// assets/style.css).
#[component]
pub fn MobileNotice() -> impl IntoView {
    view! {
        <main class="mobile-only mobile-notice">
            <p>"You are on a phone, lmao. Use computer or a tablet to view this page :)"</p>
        </main>
    }
}
