use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Visual style of a [`Button`] (or of a link styled like one).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Link,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Link => "btn btn-link",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_share_base_class() {
        for variant in [ButtonVariant::Default, ButtonVariant::Outline, ButtonVariant::Link] {
            assert!(variant.class().starts_with("btn "));
        }
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
    }
}
