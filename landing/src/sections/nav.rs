use gh_showcase::NavItem;
use leptos::prelude::*;

use super::use_site;

/// In-page anchors scroll in place; anything else opens in a new tab.
fn link_target(item: &NavItem) -> Option<&'static str> {
    match item.anchor_id() {
        Some(_) => None,
        None => Some("_blank"),
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#top" class="nav-brand">
                    <span class="nav-title">{site.name}</span>
                </a>
                <div class="nav-links">
                    {site
                        .main_nav
                        .into_iter()
                        .map(|item| {
                            let target = link_target(&item);
                            view! {
                                <a href=item.href target=target class="nav-link">
                                    {item.title}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_stay_in_page() {
        assert_eq!(link_target(&NavItem::new("Top", "#top")), None);
        assert_eq!(link_target(&NavItem::new("Features", "#features")), None);
    }

    #[test]
    fn external_links_open_new_tab() {
        let docs = NavItem::new("Docs", "https://cli.github.com/manual/gh");
        assert_eq!(link_target(&docs), Some("_blank"));
    }
}
