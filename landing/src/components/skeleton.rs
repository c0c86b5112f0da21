use leptos::prelude::*;

/// Fixed-size placeholder shown while content is loading.
#[component]
pub fn Skeleton(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("skeleton {class}") aria-busy="true">
            {children()}
        </div>
    }
}
