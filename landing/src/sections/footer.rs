use leptos::prelude::*;

use super::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();

    view! {
        <footer class="footer">
            <span class="footer-copyright">{site.footer}</span>
        </footer>
    }
}
