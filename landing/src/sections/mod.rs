// Landing page sections

use gh_showcase::SiteConfig;
use leptos::prelude::*;

mod carousel;
mod features;
mod footer;
mod hero;
mod mobile_notice;
mod nav;

pub use carousel::SnippetCarousel;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use mobile_notice::MobileNotice;
pub use nav::Nav;

/// Site config provided by `App`; defaults when rendered standalone.
pub(crate) fn use_site() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
