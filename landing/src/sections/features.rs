use gh_showcase::{FEATURE_GROUPS, FeatureGroup};
use leptos::prelude::*;

use super::use_site;
use crate::components::{Button, ButtonVariant};

#[component]
pub fn Features() -> impl IntoView {
    let site = use_site();

    view! {
        <section id="features" class="features">
            <div class="container">
                <h2 class="features-slogan">"Welcome terminal, bye bye browser."</h2>
                <div class="section-header">
                    <h2 class="section-title">"Features"</h2>
                    <p class="section-description">{format!("Some of the features of {}", site.name)}</p>
                    <p class="section-description">
                        "More info at "
                        <a href=site.docs_url target="_blank" class=ButtonVariant::Link.class()>
                            "github docs"
                        </a>
                        "."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURE_GROUPS
                        .iter()
                        .map(|group| view! { <FeatureGroupCard group=*group /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGroupCard(group: FeatureGroup) -> impl IntoView {
    view! {
        <article class="feature-group">
            <h3 class="feature-group-title">{group.heading}</h3>
            <div class="feature-pills">
                {group
                    .items
                    .into_iter()
                    .map(|item| view! { <Button variant=ButtonVariant::Outline>{item}</Button> })
                    .collect_view()}
            </div>
        </article>
    }
}
