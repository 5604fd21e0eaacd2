//! HTML builders for the two portal pages.
//!
//! The home page carries the search box and the card grid; the article
//! page carries the hero, body sections, share controls and a related
//! strip. Image slots are emitted with `data-fallback`/`data-placeholder`
//! attributes so a host shell can drive the source chain on error
//! events; the initial `src` is always the primary URL.

use krynica_media::PLACEHOLDER_DATA_URI;
use krynica_nav::{ShareTarget, article_share_url};
use krynica_store::{ArticleStore, search};
use krynica_types::Article;

use crate::theme::Theme;

/// Number of entries in the related strip.
const RELATED_LIMIT: usize = 3;

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn image_slot(primary: &str, fallback: Option<&str>, alt: &str, class: &str) -> String {
    let mut attrs = format!(
        "class=\"{class}\" src=\"{}\" alt=\"{}\" data-placeholder=\"{PLACEHOLDER_DATA_URI}\"",
        html_escape(primary),
        html_escape(alt),
    );
    if let Some(url) = fallback {
        attrs.push_str(&format!(" data-fallback=\"{}\"", html_escape(url)));
    }
    format!("<div class=\"image-slot skeleton\"><img {attrs}></div>")
}

fn page_shell(title: &str, theme: &Theme, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(title),
        theme.css_variables(),
        body,
    )
}

fn header(with_back: bool) -> String {
    let mut html = String::from("<header class=\"site-header\">");
    if with_back {
        html.push_str("<a class=\"back-link\" href=\"/\">&larr; На главную</a>");
    }
    html.push_str(
        "<a class=\"site-title\" href=\"/\">Крынiца</a>\
         <p class=\"site-tagline\">Культура и история Минска</p></header>",
    );
    html
}

fn footer() -> String {
    "<footer class=\"site-footer\"><p>Крынiца &middot; культура и история Минска</p></footer>"
        .to_string()
}

fn news_card(article: &Article) -> String {
    format!(
        "<article class=\"news-card\"><a href=\"{}\">{}\
         <span class=\"category-pill\">{}</span>\
         <h2>{}</h2><p class=\"card-subtitle\">{}</p>\
         <p class=\"card-meta\">{}</p></a></article>",
        html_escape(&article.path()),
        image_slot(
            &article.thumbnail,
            article.thumbnail_fallback.as_deref(),
            &article.title,
            "card-thumb",
        ),
        html_escape(&article.category),
        html_escape(article.short_title()),
        html_escape(&article.subtitle),
        html_escape(&article.date),
    )
}

/// Render the home page: header, search box, card grid. The grid holds
/// the articles matching `query` (all of them for an empty query); a
/// no-results message replaces the grid when nothing matches.
pub fn render_home(store: &ArticleStore, query: &str, theme: &Theme) -> String {
    let hits = search::filter(store.articles(), query);
    log::debug!("rendering home: {} of {} articles", hits.len(), store.len());

    let mut body = header(false);
    body.push_str(&format!(
        "<form class=\"search\" action=\"/\" method=\"get\">\
         <input type=\"search\" name=\"q\" placeholder=\"Поиск по новостям...\" value=\"{}\">\
         </form>",
        html_escape(query.trim()),
    ));

    if hits.is_empty() {
        body.push_str(&format!(
            "<p class=\"empty-state\">По запросу &laquo;{}&raquo; ничего не найдено</p>",
            html_escape(query.trim()),
        ));
    } else {
        body.push_str("<main class=\"card-grid\">");
        for article in hits {
            body.push_str(&news_card(article));
        }
        body.push_str("</main>");
    }

    body.push_str(&footer());
    page_shell("Крынiца: культура и история Минска", theme, &body)
}

fn share_block(origin: &str, article: &Article) -> String {
    let url = article_share_url(origin, &article.slug);
    let mut html = String::from("<div class=\"share\"><span>Поделиться:</span>");
    for target in ShareTarget::ALL {
        html.push_str(&format!(
            "<a class=\"share-link\" style=\"background:{}\" href=\"{}\" \
             target=\"_blank\" rel=\"noopener\">{}</a>",
            target.color(),
            html_escape(&target.share_url(&url, &article.title)),
            target.label(),
        ));
    }
    html.push_str(&format!(
        "<button class=\"copy-link\" data-share-url=\"{}\">Копировать ссылку</button></div>",
        html_escape(&url),
    ));
    html
}

fn related_strip(store: &ArticleStore, slug: &str) -> String {
    let related = store.related(slug, RELATED_LIMIT);
    if related.is_empty() {
        return String::new();
    }
    let mut html = String::from(
        "<aside class=\"related\"><h2>Читайте также</h2><div class=\"related-strip\">",
    );
    for article in related {
        html.push_str(&format!(
            "<a class=\"related-card\" href=\"{}\">{}\
             <span class=\"category-pill\">{}</span><h3>{}</h3></a>",
            html_escape(&article.path()),
            image_slot(
                &article.thumbnail,
                article.thumbnail_fallback.as_deref(),
                &article.title,
                "related-thumb",
            ),
            html_escape(&article.category),
            html_escape(article.short_title()),
        ));
    }
    html.push_str("</div></aside>");
    html
}

/// Render an article's detail page. `origin` is the absolute site
/// origin used to build share URLs.
pub fn render_article(store: &ArticleStore, article: &Article, origin: &str, theme: &Theme) -> String {
    let mut body = header(true);

    body.push_str("<main class=\"article\">");
    body.push_str(&format!(
        "<span class=\"category-pill\">{}</span><h1>{}</h1>\
         <p class=\"subtitle\">{}</p>\
         <p class=\"meta\">{} &middot; {}</p>",
        html_escape(&article.category),
        html_escape(&article.title),
        html_escape(&article.subtitle),
        html_escape(&article.date),
        html_escape(&article.author),
    ));

    body.push_str(&format!(
        "<figure class=\"hero\">{}<figcaption>{}</figcaption></figure>",
        image_slot(
            &article.hero_image,
            article.hero_image_fallback.as_deref(),
            &article.title,
            "hero-image",
        ),
        html_escape(&article.hero_caption),
    ));

    body.push_str(&format!(
        "<p class=\"lead\">{}</p>",
        html_escape(&article.lead)
    ));

    for section in &article.sections {
        if let Some(title) = &section.title {
            body.push_str(&format!("<h2>{}</h2>", html_escape(title)));
        }
        for paragraph in &section.content {
            body.push_str(&format!("<p>{}</p>", html_escape(paragraph)));
        }
    }

    body.push_str(&share_block(origin, article));
    body.push_str("</main>");
    body.push_str(&related_strip(store, &article.slug));
    body.push_str(&footer());

    page_shell(&article.title, theme, &body)
}
