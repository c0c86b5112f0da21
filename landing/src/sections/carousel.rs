use gh_showcase::{Carousel, ConversionRequest, Deck, Step, SyntectHighlighter, convert};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use super::use_site;
use crate::components::{Button, ButtonVariant, Skeleton};

/// Rotating `gh` transcripts with Previous/Next controls.
///
/// The core [`Carousel`] lives in a `StoredValue` for the lifetime of the
/// component; its listener mirrors every state change into `snapshot`, which
/// is all the view reads. Highlighting runs on `spawn_local`, and results are
/// fed back through `Carousel::resolve`, which drops anything superseded by a
/// later click.
#[component]
pub fn SnippetCarousel() -> impl IntoView {
    let site = use_site();

    let mut carousel = Carousel::new(Deck::builtin().clone(), site.carousel);
    let snapshot = RwSignal::new(carousel.state().clone());
    carousel.subscribe(move |state| snapshot.set(state.clone()));
    let first = carousel.mount();
    let carousel = StoredValue::new(carousel);

    let highlight = move |request: ConversionRequest| {
        spawn_local(async move {
            let conversion = convert(&SyntectHighlighter::new(), request).await;
            match carousel.try_update_value(|c| c.resolve(conversion)) {
                Some(resolution) => debug!(?resolution, "conversion resolved"),
                None => debug!("carousel gone before highlighting finished"),
            }
        });
    };
    highlight(first);

    let step = move |step: Step| {
        if let Some(request) = carousel.try_update_value(|c| c.advance(step)) {
            highlight(request);
        }
    };

    on_cleanup(|| debug!("carousel discarded"));

    let (copied, set_copied) = signal(false);
    let copy_command = move |_| {
        if let Some(window) = web_sys::window() {
            let command = snapshot.with_untracked(|s| s.annotation.command.to_string());
            let _ = window.navigator().clipboard().write_text(&command);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(1500),
            );
        }
    };

    view! {
        <Show
            when=move || !snapshot.with(|s| s.is_converting)
            fallback=|| view! { <Skeleton class="carousel-skeleton">"Loading codeblock"</Skeleton> }
        >
            <div class="carousel">
                <div class="carousel-annotation">
                    <p class="carousel-command">
                        <span class="terminal-prompt">"$ "</span>
                        {move || snapshot.with(|s| s.annotation.command.to_string())}
                        <button class="carousel-copy-btn" on:click=copy_command>
                            {move || if copied.get() { "ok" } else { "cp" }}
                        </button>
                    </p>
                    <p class="carousel-description">
                        {move || snapshot.with(|s| s.annotation.description.to_string())}
                    </p>
                </div>
                <div
                    class="carousel-code"
                    inner_html=move || snapshot.with(|s| s.rendered_markup.clone())
                ></div>
                <div class="carousel-controls">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| step(Step::Previous))
                    >
                        "Previous"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| step(Step::Next))
                    >
                        "Next"
                    </Button>
                </div>
            </div>
        </Show>
    }
}
