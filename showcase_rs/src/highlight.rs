//! Highlighting service: turns a transcript into styled HTML.
//!
//! The carousel only knows the [`Highlighter`] trait. [`SyntectHighlighter`]
//! is the production implementation, backed by syntect's bundled grammars
//! and themes.

use std::future::Future;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use tracing::debug;

use crate::error::HighlightError;

pub const DEFAULT_LANGUAGE: &str = "shell";
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Source language tag and visual theme for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    pub language: String,
    pub theme: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Converts raw text in a source language into styled markup.
pub trait Highlighter {
    fn highlight(
        &self,
        text: &str,
        options: &HighlightOptions,
    ) -> impl Future<Output = Result<String, HighlightError>>;
}

/// syntect-backed highlighter. Grammars and themes are parsed once per
/// process and shared by every instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, text: &str, options: &HighlightOptions) -> Result<String, HighlightError> {
        let syntax = resolve_syntax(&options.language)?;
        let theme = THEMES
            .themes
            .get(&options.theme)
            .ok_or_else(|| HighlightError::UnknownTheme(options.theme.clone()))?;
        let html = highlighted_html_for_string(text, &SYNTAXES, syntax, theme)?;
        debug!(
            language = %options.language,
            theme = %options.theme,
            bytes = html.len(),
            "highlighted snippet"
        );
        Ok(html)
    }
}

impl Highlighter for SyntectHighlighter {
    async fn highlight(
        &self,
        text: &str,
        options: &HighlightOptions,
    ) -> Result<String, HighlightError> {
        self.render(text, options)
    }
}

/// Maps a language tag to a bundled grammar. Transcript-ish tags all land on
/// the Bourne Again Shell grammar, since syntect ships no console grammar.
fn resolve_syntax(language: &str) -> Result<&'static SyntaxReference, HighlightError> {
    let lowered = language.to_ascii_lowercase();
    let token = match lowered.as_str() {
        "shell" | "console" | "terminal" | "shellsession" | "bash" | "zsh" | "sh" => "sh",
        other => other,
    };
    SYNTAXES
        .find_syntax_by_token(token)
        .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()))
}

/// Escapes text for inclusion in HTML without any styling.
pub fn plain_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str("<pre class=\"plain\"><code>");
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out.push_str("</code></pre>");
    out
}
