//! HTML page rendering.
//!
//! Every page is a pure function `(data) → Markup`, composed through
//! [`base_document`]. Uses [maud](https://maud.lambda.xyz/) for compile-time
//! HTML templating: malformed markup is a build error, interpolated text is
//! auto-escaped, and there is no template directory to ship.
//!
//! ## Pages
//!
//! - **Home** (`/`): greeting header plus the list of category index pages
//! - **Index** (`/{category}/`): numbered article list, flat or sectioned
//!   with group labels, driven by the [`crate::ordering`] engine
//! - **Article** (`/{category}/{article}/`): breadcrumbs, optional deferred
//!   video embed, markdown body, "Next:" link
//! - **404** (`404.html`): consolation cookie and links back into the site
//!
//! The shared stylesheet and script are embedded at compile time and inlined
//! into every page — no extra requests, no assets to keep in sync.

use crate::config::SiteConfig;
use crate::markdown;
use crate::ordering::{self, Row};
use crate::types::{ArticleRecord, IndexPage, Manifest};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

// ============================================================================
// Layout components
// ============================================================================

/// The base document shell: head, inlined styles, shared scripts, and the
/// optional analytics snippet (only when an analytics id is configured).
fn base_document(
    config: &SiteConfig,
    page_title: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title {
                    (config.site_name)
                    @if !page_title.is_empty() { " | " (page_title) }
                }
                meta name="description" content=(config.tagline);
                style { (PreEscaped(CSS)) }
            }
            body class=[body_class] {
                (content)
                script { (PreEscaped(JS)) }
                @if let Some(id) = &config.analytics_id {
                    script src="https://swetrix.org/swetrix.js" defer {}
                    script {
                        (PreEscaped(format!(
                            "document.addEventListener('DOMContentLoaded', () => {{ swetrix.init('{id}'); swetrix.trackViews(); }})"
                        )))
                    }
                    noscript {
                        img src={ "https://api.swetrix.com/log/noscript?pid=" (id) }
                            alt="" referrerpolicy="no-referrer-when-downgrade";
                    }
                }
            }
        }
    }
}

/// Breadcrumb trail for an index page: home › current.
fn index_breadcrumbs(config: &SiteConfig, title: &str) -> Markup {
    html! {
        nav {
            a href="/" { (config.site_name) } " > " (title)
        }
    }
}

/// Breadcrumb trail for an article: home › collection › current.
fn article_breadcrumbs(
    config: &SiteConfig,
    collection_url: &str,
    collection_name: &str,
    title: &str,
) -> Markup {
    html! {
        nav {
            a href="/" { (config.site_name) }
            " > "
            a href=(collection_url) { (collection_name) }
            " > "
            (title)
        }
    }
}

/// Click-to-load YouTube embed. Nothing is fetched from YouTube until the
/// visitor presses play, so merely opening the page shares no data.
fn video_embed(video_id: &str) -> Markup {
    html! {
        div id="video" {
            p {
                button onclick={ "showVideo('" (video_id) "')" } name="Play" title="Play YouTube Video" {
                    (PreEscaped("&#9658;"))
                }
                small {
                    "Clicking the " i { "Play" } " button above will load a video from YouTube. "
                    "For playing YouTube videos, "
                    a rel="noreferrer" href="https://policies.google.com/privacy" target="_blank" {
                        "Google's privacy policy"
                    }
                    " applies."
                }
            }
        }
    }
}

/// A single article row in a numbered list.
fn article_row(number: usize, record: &ArticleRecord) -> Markup {
    html! {
        li {
            a href=(record.url) { (number) ". " (record.title) }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

/// The home page: greeting, intro, and the category list.
pub fn render_home(manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    let (page_title, intro) = match &manifest.home {
        Some(home) => (home.title.as_str(), Some(markdown::to_html(&home.body))),
        None => ("", None),
    };

    let content = html! {
        header {
            h1 {
                "Welcome to " (config.site_name) ". "
                span id="jsHand" { "👋" }
            }
            @if let Some(intro) = &intro {
                (PreEscaped(intro.as_str()))
            } @else {
                p { (config.tagline) }
            }
            p {
                "Come in, have a cookie "
                span id="jsCookie" { "🍪 " }
                ", and click on any of the categories below."
            }
        }
        main {
            ul role="list" {
                @for index in &manifest.indexes {
                    li {
                        a href=(index.url) {
                            h2 { (index.title) }
                        }
                    }
                }
            }
        }
    };

    base_document(config, page_title, Some("home"), content)
}

/// A category index page. Flat collections render one continuous numbered
/// list; collections with declared sections render one list per section with
/// group labels interleaved.
pub fn render_index_page(page: &IndexPage, manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    let intro = markdown::to_html(&page.body);

    let listing = if page.sections.is_empty() {
        let sorted = ordering::sorted_collection(&manifest.articles, &page.collection);
        html! {
            ol {
                @for (i, record) in sorted.iter().enumerate() {
                    (article_row(i + 1, record))
                }
            }
        }
    } else {
        let partition =
            ordering::section_partition(&manifest.articles, &page.collection, &page.sections);
        html! {
            @for (section, records) in &partition {
                h2 { (section.title) }
                ol {
                    @for row in ordering::grouped_rows(records, &page.sections) {
                        @match row {
                            Row::Label(label) => {
                                li class="group-label" {
                                    h3 { small { (label) ":" } }
                                }
                            }
                            Row::Article { number, record } => {
                                (article_row(number, record))
                            }
                        }
                    }
                }
            }
        }
    };

    let content = html! {
        (index_breadcrumbs(config, &page.title))
        header {
            h1 { (page.title) }
        }
        main {
            @if !page.body.trim().is_empty() {
                header { (PreEscaped(intro.as_str())) }
            }
            (listing)
        }
    };

    base_document(config, &page.title, Some("index"), content)
}

/// An article page: breadcrumbs top and bottom, optional video embed, the
/// rendered markdown body, and the sequential "Next:" link.
pub fn render_article_page(article: &ArticleRecord, manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    let collection_name = manifest.collection_name(&article.tags);
    let collection_url = manifest
        .index_for(&article.tags)
        .map(|idx| idx.url.clone())
        .unwrap_or_else(|| format!("/{}/", article.tags));
    let crumbs = article_breadcrumbs(config, &collection_url, collection_name, &article.title);
    let body = markdown::to_html(&article.body);
    let next = ordering::next_article(&manifest.articles, &article.tags, &article.path_stem);

    let content = html! {
        (crumbs)
        header {
            h1 { (article.title) }
            @if let Some(update) = &article.last_update {
                @if let Some(repo) = &config.source_repo {
                    a href={ (repo) "/commits/main/" (article.path_stem) ".md" } target="_blank" {
                        "Last content update " (update)
                    }
                } @else {
                    small { "Last content update " (update) }
                }
            }
        }
        main {
            @if let Some(video_id) = &article.video_id {
                (video_embed(video_id))
            }
            article {
                (PreEscaped(body.as_str()))
            }
        }
        footer {
            @if let Some(next) = next {
                a class="button" href=(next.url) {
                    "Next: " (next.title)
                }
            }
        }
        (crumbs)
    };

    base_document(config, &article.title, Some("article"), content)
}

/// The 404 page, written to `dist/404.html` for the host to serve.
pub fn render_not_found(manifest: &Manifest) -> Markup {
    let config = &manifest.config;

    let content = html! {
        main {
            h1 { "404" }
            p {
                "Hm. This page does not seem to exist (anymore?). "
                "But no need to worry. Just have a cookie "
                span id="jsCookie" { "🍪 " }
                "."
            }
            @if !manifest.indexes.is_empty() {
                p { "Check out one of the tutorials instead:" }
                ul {
                    @for index in &manifest.indexes {
                        li {
                            a href=(index.url) { (index.title) }
                        }
                    }
                }
            }
            p {
                "Or go back to the " a href="/" { "home page" } "."
            }
        }
    };

    base_document(config, "404", None, content)
}

// ============================================================================
// Tests
// ============================================================================
