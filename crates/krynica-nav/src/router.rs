//! Page router: maps the current location to a page state and keeps the
//! two in sync through an injected navigation adapter.
//!
//! The mapping from path to page is total and deterministic: every path
//! yields exactly `Home` or `Article(slug)`, never an error. Unknown or
//! unresolvable slugs fall back to `Home`.

use krynica_platform::{NavigationAdapter, Viewport};
use krynica_store::ArticleStore;
use krynica_types::error::Result;

/// The current navigation state. Exactly one page is current at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Article(String),
}

/// A parsed path pattern, before slug resolution against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Article(String),
}

/// Parse a location path into a route pattern.
///
/// Only `/news/{slug}.html` with a non-empty single-segment slug parses
/// as an article route; everything else is the home route.
pub fn parse_route(path: &str) -> Route {
    let Some(rest) = path.strip_prefix("/news/") else {
        return Route::Home;
    };
    let Some(slug) = rest.strip_suffix(".html") else {
        return Route::Home;
    };
    if slug.is_empty() || slug.contains('/') {
        return Route::Home;
    }
    Route::Article(slug.to_string())
}

/// The navigation state machine.
pub struct Router<'a> {
    store: &'a ArticleStore,
    page: Page,
}

impl<'a> Router<'a> {
    /// Create a router whose initial page is derived from the adapter's
    /// current location, exactly like a later history-change would be.
    pub fn new(store: &'a ArticleStore, adapter: &dyn NavigationAdapter) -> Self {
        let page = derive_from_path(store, &adapter.current_path());
        Self { store, page }
    }

    /// The current page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Map a path to a page: `/news/{slug}.html` with a resolvable slug
    /// is that article's page, anything else is home.
    pub fn derive_from_path(&self, path: &str) -> Page {
        derive_from_path(self.store, path)
    }

    /// Navigate to an article by slug.
    ///
    /// Pushes a history entry and scrolls to top only when the slug
    /// resolves; an unknown slug is a silent no-op. Returns whether a
    /// navigation happened.
    pub fn navigate_to_article(
        &mut self,
        slug: &str,
        adapter: &mut dyn NavigationAdapter,
        viewport: &mut dyn Viewport,
    ) -> Result<bool> {
        if self.store.get_by_slug(slug).is_none() {
            log::debug!("ignoring navigation to unknown slug {slug}");
            return Ok(false);
        }
        self.page = Page::Article(slug.to_string());
        adapter.push_path(&format!("/news/{slug}.html"))?;
        viewport.scroll_to_top();
        Ok(true)
    }

    /// Navigate to the home listing.
    pub fn navigate_to_home(
        &mut self,
        adapter: &mut dyn NavigationAdapter,
        viewport: &mut dyn Viewport,
    ) -> Result<()> {
        self.page = Page::Home;
        adapter.push_path("/")?;
        viewport.scroll_to_top();
        Ok(())
    }

    /// React to an external (back/forward) history change by re-deriving
    /// the page from the adapter's current location.
    pub fn handle_history_change(&mut self, adapter: &dyn NavigationAdapter) {
        self.page = derive_from_path(self.store, &adapter.current_path());
    }
}

fn derive_from_path(store: &ArticleStore, path: &str) -> Page {
    match parse_route(path) {
        Route::Article(slug) if store.get_by_slug(&slug).is_some() => Page::Article(slug),
        _ => Page::Home,
    }
}
