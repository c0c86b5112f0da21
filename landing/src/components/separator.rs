use leptos::prelude::*;

#[component]
pub fn Separator() -> impl IntoView {
    view! { <div class="separator" role="separator" aria-orientation="horizontal"></div> }
}
