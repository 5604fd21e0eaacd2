//! Static HTML rendering for the portal.
//!
//! Pages are built as plain HTML strings from the store and the design
//! tokens in [`theme`], so the same renderer serves the one-shot CLI
//! mode and the static export.

pub mod page;
pub mod theme;

pub use page::{html_escape, render_article, render_home};
pub use theme::Theme;
