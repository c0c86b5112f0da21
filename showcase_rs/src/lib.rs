//! # gh-showcase
//!
//! Core of the GitHub CLI landing page: the terminal transcripts it shows,
//! the snippet carousel with fenced asynchronous highlighting, and the site
//! configuration. Nothing here depends on a UI framework; the `landing`
//! crate wires it into Leptos.
//!
//! ```rust
//! use gh_showcase::{Carousel, CarouselConfig, Deck, Step};
//!
//! let mut carousel = Carousel::new(Deck::builtin().clone(), CarouselConfig::default());
//! let first = carousel.mount();
//! assert!(first.text.starts_with("gh pr status"));
//!
//! let request = carousel.advance(Step::Previous);
//! assert_eq!(carousel.state().selected_index, 2);
//! assert!(request.text.starts_with("gh pr checkout 12"));
//! ```
//!
//! ## Modules
//!
//! - [`content`] - transcripts, annotations, feature groups
//! - [`carousel`] - the carousel state machine
//! - [`highlight`] - the highlighting service
//! - [`site`] - `site.toml` configuration
//! - [`error`] - error types

#![warn(rustdoc::missing_crate_level_docs)]

pub mod carousel;
pub mod content;
pub mod error;
pub mod highlight;
pub mod site;

pub use carousel::{
    Carousel, CarouselState, Conversion, ConversionRequest, Resolution, Step, SubscriptionId,
    Ticket, convert, wrap_index,
};
pub use content::{Annotation, Deck, FEATURE_GROUPS, FeatureGroup};
pub use error::{HighlightError, Result, ShowcaseError};
pub use highlight::{HighlightOptions, Highlighter, SyntectHighlighter, plain_markup};
pub use site::{CarouselConfig, FailurePolicy, NavItem, SiteConfig};
