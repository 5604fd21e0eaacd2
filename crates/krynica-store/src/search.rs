//! Free-text article filtering.
//!
//! A pure, stable filter: it never reorders, never mutates, and is safe
//! to run on every keystroke.

use krynica_types::Article;

/// Filter `articles` by a free-text query.
///
/// An empty or whitespace-only query returns the full input unchanged.
/// Otherwise the query is case-folded and matched as a substring against
/// title, subtitle, lead, and category; one matching field is enough.
pub fn filter<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let query = query.trim();
    if query.is_empty() {
        return articles.iter().collect();
    }
    let query = query.to_lowercase();
    articles
        .iter()
        .filter(|a| matches_query(a, &query))
        .collect()
}

/// True when any searchable field contains the case-folded query.
pub fn matches_query(article: &Article, folded_query: &str) -> bool {
    article.title.to_lowercase().contains(folded_query)
        || article.subtitle.to_lowercase().contains(folded_query)
        || article.lead.to_lowercase().contains(folded_query)
        || article.category.to_lowercase().contains(folded_query)
}
