//! Krynica portal entry point.
//!
//! One binary, three modes:
//!   krynica [PATH]            render the page for PATH (default `/`) to stdout
//!   krynica --search QUERY    print matching articles as JSON lines
//!   krynica --export DIR      write the whole site as static HTML under DIR
//!
//! `--origin URL` (or the KRYNICA_ORIGIN env var) sets the absolute
//! origin used in share links; `--theme FILE` loads design tokens from a
//! TOML file instead of the builtin set.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use krynica_nav::{Page, Router};
use krynica_platform::InMemoryHistory;
use krynica_render::{Theme, render_article, render_home};
use krynica_store::{ArticleStore, search};

const DEFAULT_ORIGIN: &str = "https://krynica.example.by";

enum Mode {
    Render(String),
    Search(String),
    Export(String),
}

struct Cli {
    mode: Mode,
    origin: String,
    theme_path: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>, env_origin: Option<String>) -> Result<Cli> {
    let mut mode = None;
    let mut origin = env_origin.unwrap_or_else(|| DEFAULT_ORIGIN.into());
    let mut theme_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" => {
                let query = args.next().context("--search requires a query")?;
                mode = Some(Mode::Search(query));
            },
            "--export" => {
                let dir = args.next().context("--export requires a directory")?;
                mode = Some(Mode::Export(dir));
            },
            "--origin" => {
                origin = args.next().context("--origin requires a URL")?;
            },
            "--theme" => {
                theme_path = Some(args.next().context("--theme requires a file")?);
            },
            path if path.starts_with('/') => {
                mode = Some(Mode::Render(path.to_string()));
            },
            other => bail!("unrecognized argument: {other}"),
        }
    }

    Ok(Cli {
        mode: mode.unwrap_or_else(|| Mode::Render("/".into())),
        origin,
        theme_path,
    })
}

fn load_theme(cli: &Cli) -> Result<Theme> {
    match &cli.theme_path {
        Some(path) => {
            let toml_str =
                fs::read_to_string(path).with_context(|| format!("reading theme {path}"))?;
            Ok(Theme::from_toml(&toml_str)?)
        },
        None => Ok(Theme::builtin()?),
    }
}

fn render_path(store: &ArticleStore, path: &str, origin: &str, theme: &Theme) -> Result<String> {
    let history = InMemoryHistory::new(path);
    let router = Router::new(store, &history);
    match router.page() {
        Page::Home => Ok(render_home(store, "", theme)),
        Page::Article(slug) => {
            let article = store
                .get_by_slug(slug)
                .context("router produced a page for an unknown slug")?;
            Ok(render_article(store, article, origin, theme))
        },
    }
}

fn run_search(store: &ArticleStore, query: &str) -> Result<()> {
    let hits = search::filter(store.articles(), query);
    log::info!("{} article(s) match {query:?}", hits.len());
    for article in hits {
        let line = serde_json::json!({
            "slug": article.slug,
            "title": article.title,
            "category": article.category,
            "date": article.date,
            "path": article.path(),
        });
        println!("{line}");
    }
    Ok(())
}

fn run_export(store: &ArticleStore, dir: &str, origin: &str, theme: &Theme) -> Result<()> {
    let root = Path::new(dir);
    let news_dir = root.join("news");
    fs::create_dir_all(&news_dir).with_context(|| format!("creating {}", news_dir.display()))?;

    fs::write(root.join("index.html"), render_home(store, "", theme))?;
    for article in store.iter() {
        let html = render_article(store, article, origin, theme);
        fs::write(news_dir.join(format!("{}.html", article.slug)), html)?;
    }
    log::info!(
        "exported index and {} article page(s) to {}",
        store.len(),
        root.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args(
        std::env::args().skip(1),
        std::env::var("KRYNICA_ORIGIN").ok(),
    )?;
    let store = ArticleStore::builtin()?;
    let theme = load_theme(&cli)?;

    match &cli.mode {
        Mode::Render(path) => {
            let html = render_path(&store, path, &cli.origin, &theme)?;
            print!("{html}");
        },
        Mode::Search(query) => run_search(&store, query)?,
        Mode::Export(dir) => run_export(&store, dir, &cli.origin, &theme)?,
    }
    Ok(())
}
