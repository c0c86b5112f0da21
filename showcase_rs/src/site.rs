//! Site configuration.
//!
//! The landing page embeds a `site.toml`; anything missing from it falls
//! back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::highlight::HighlightOptions;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub tagline: String,
    pub main_nav: Vec<NavItem>,
    pub docs_url: String,
    pub footer: String,
    /// tracing filter directive, e.g. `info` or `gh_showcase=debug`
    pub log_level: String,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Github CLI".into(),
            description: "A website to showcase the github CLI tool".into(),
            tagline: "Best tool for productivity with Github".into(),
            main_nav: vec![NavItem::new("Top", "#top"), NavItem::new("Features", "#features")],
            docs_url: "https://cli.github.com/manual/gh".into(),
            footer: "Made by Adam Lipert, 2024".into(),
            log_level: "info".into(),
            carousel: CarouselConfig::default(),
        }
    }
}

/// In-page navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Element id the link targets, if it is an in-page anchor.
    pub fn anchor_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Carousel-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    #[serde(flatten)]
    pub highlight: HighlightOptions,
    pub on_failure: FailurePolicy,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            highlight: HighlightOptions::default(),
            on_failure: FailurePolicy::KeepLoading,
        }
    }
}

/// What the carousel shows when highlighting a snippet fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Leave the loading placeholder up.
    #[default]
    KeepLoading,
    /// Show the transcript escaped but unstyled.
    PlainText,
}

impl SiteConfig {
    /// Parse a `site.toml` document.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{DEFAULT_LANGUAGE, DEFAULT_THEME};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_page_copy() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "Github CLI");
        assert_eq!(
            config.main_nav,
            vec![NavItem::new("Top", "#top"), NavItem::new("Features", "#features")]
        );
        assert_eq!(config.carousel.highlight.language, DEFAULT_LANGUAGE);
        assert_eq!(config.carousel.highlight.theme, DEFAULT_THEME);
        assert_eq!(config.carousel.on_failure, FailurePolicy::KeepLoading);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml(
            r#"
name = "gh"

[carousel]
theme = "Solarized (dark)"
on_failure = "plain-text"
"#,
        )
        .unwrap();
        assert_eq!(config.name, "gh");
        assert_eq!(config.footer, SiteConfig::default().footer);
        assert_eq!(config.carousel.highlight.language, DEFAULT_LANGUAGE);
        assert_eq!(config.carousel.highlight.theme, "Solarized (dark)");
        assert_eq!(config.carousel.on_failure, FailurePolicy::PlainText);
    }

    #[test]
    fn nav_entries_parse_in_order() {
        let config = SiteConfig::from_toml(
            r##"
[[main_nav]]
title = "Features"
href = "#features"

[[main_nav]]
title = "Docs"
href = "https://cli.github.com/manual"
"##,
        )
        .unwrap();
        let titles: Vec<_> = config.main_nav.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Features", "Docs"]);
        assert_eq!(config.main_nav[0].anchor_id(), Some("features"));
        assert_eq!(config.main_nav[1].anchor_id(), None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = SiteConfig::from_toml("name = ").unwrap_err();
        assert!(matches!(err, crate::error::ShowcaseError::Config(_)));
    }

    #[test]
    fn empty_anchor_is_not_an_anchor() {
        assert_eq!(NavItem::new("Home", "#").anchor_id(), None);
    }
}
