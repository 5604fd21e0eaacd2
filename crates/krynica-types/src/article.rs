//! The article data model.
//!
//! Articles are loaded once at startup from a static dataset and never
//! mutated afterwards. The `slug` is the unique lookup key and doubles
//! as the URL path segment (`/news/{slug}.html`).

use serde::Deserialize;

/// One titled block of body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSection {
    /// Section heading. Lead sections commonly omit it.
    #[serde(default)]
    pub title: Option<String>,
    /// Ordered body paragraphs.
    pub content: Vec<String>,
}

/// An immutable article record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    pub id: u32,
    /// URL-safe unique identifier, the primary lookup key.
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    /// Standfirst paragraph shown before the body.
    pub lead: String,
    pub category: String,
    pub date: String,
    pub author: String,
    pub hero_image: String,
    /// Alternate hero URL attempted when the primary fails to load.
    #[serde(default)]
    pub hero_image_fallback: Option<String>,
    pub hero_caption: String,
    pub thumbnail: String,
    /// Alternate thumbnail URL attempted when the primary fails to load.
    #[serde(default)]
    pub thumbnail_fallback: Option<String>,
    /// Curated related-article slugs, consulted before the stable-order
    /// fallback. May be empty.
    #[serde(default)]
    pub related: Vec<String>,
    pub sections: Vec<ArticleSection>,
}

impl Article {
    /// The card headline: everything before the first `:` in the title.
    pub fn short_title(&self) -> &str {
        self.title.split(':').next().unwrap_or(&self.title)
    }

    /// Path of this article's detail page.
    pub fn path(&self) -> String {
        format!("/news/{}.html", self.slug)
    }
}
