//! Error types for the showcase core.

use thiserror::Error;

/// Why a highlighting request could not produce markup.
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("no grammar registered for language `{0}`")]
    UnknownLanguage(String),
    #[error("no bundled theme named `{0}`")]
    UnknownTheme(String),
    #[error("highlighting failed: {0}")]
    Render(#[from] syntect::Error),
}

/// Top-level error for content validation and configuration.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("deck has {snippets} snippets but {annotations} annotations")]
    MismatchedDeck { snippets: usize, annotations: usize },
    #[error("deck must contain at least one snippet")]
    EmptyDeck,
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
