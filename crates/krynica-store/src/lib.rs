//! Read-only article store.
//!
//! The store is built once at startup from a static TOML dataset and is
//! never mutated afterwards. It answers exact slug lookups and
//! "related to slug" queries; free-text filtering lives in [`search`].

pub mod search;

use serde::Deserialize;

use krynica_types::error::{KrynicaError, Result};
use krynica_types::Article;

/// Builtin dataset shipped with the engine.
const BUILTIN_ARTICLES: &str = include_str!("../assets/articles.toml");

/// Top-level shape of a dataset file.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    articles: Vec<Article>,
}

/// The read-only article collection.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Build a store from a TOML dataset string.
    ///
    /// Duplicate slugs are a load error: the slug is the primary key and
    /// every route in the portal depends on it being unique.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let file: DatasetFile = toml::from_str(toml_str)?;
        for (i, article) in file.articles.iter().enumerate() {
            if file.articles[..i].iter().any(|a| a.slug == article.slug) {
                return Err(KrynicaError::Store(format!(
                    "duplicate slug: {}",
                    article.slug
                )));
            }
        }
        log::info!("loaded {} articles", file.articles.len());
        Ok(Self {
            articles: file.articles,
        })
    }

    /// Build the store from the builtin dataset.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_ARTICLES)
    }

    /// Exact-match lookup by slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Up to `limit` articles related to `slug`, never including the
    /// article itself.
    ///
    /// Curated `related` slugs come first, in their curated order;
    /// unresolvable or self-referencing entries are skipped. The list is
    /// then topped up with the remaining articles in stable dataset
    /// order.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Article> {
        let mut out: Vec<&Article> = Vec::new();

        if let Some(subject) = self.get_by_slug(slug) {
            for related_slug in &subject.related {
                if out.len() >= limit {
                    return out;
                }
                if related_slug == slug {
                    continue;
                }
                match self.get_by_slug(related_slug) {
                    Some(article) if !out.iter().any(|a| a.slug == article.slug) => {
                        out.push(article);
                    },
                    Some(_) => {},
                    None => {
                        log::warn!("unknown related slug {related_slug} on {slug}");
                    },
                }
            }
        }

        for article in &self.articles {
            if out.len() >= limit {
                break;
            }
            if article.slug != slug && !out.iter().any(|a| a.slug == article.slug) {
                out.push(article);
            }
        }
        out
    }

    /// All articles in stable dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    /// Dataset-order slice view, for the free-text filter.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
