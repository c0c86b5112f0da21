use leptos::prelude::*;

use super::{SnippetCarousel, use_site};

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();

    view! {
        <section id="top" class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">{site.name}</h1>
                    <p class="hero-description">{site.tagline}</p>
                </div>
                <SnippetCarousel />
            </div>
        </section>
        <div class="scroll-hint">
            <a href="#features" class="scroll-arrow" aria-label="Scroll to features">
                "↓"
            </a>
        </div>
    }
}
