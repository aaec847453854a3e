//! # Simple Course
//!
//! A minimal static site generator for sequential tutorial courses.
//! Your filesystem is the data source: filenames define reading order, a
//! front-matter tag assigns each article to a collection, and each
//! collection's index page drives its table of contents.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content is processed in two independent stages joined by a JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Validation without building**: `check` runs the scan stage alone and
//!   reports every content error before any HTML is written.
//! - **Testability**: the generate stage is a pure function of the manifest,
//!   so ordering and rendering logic can be exercised without a content tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, parses front matter, classifies pages, produces the manifest |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`ordering`] | The course engine: collection sorting, section partitioning, group labels, next-article links |
//! | [`render`] | Maud page renderers: home, index, article, 404, plus the shared document shell |
//! | [`markdown`] | Markdown → HTML with self-linking heading anchors |
//! | [`frontmatter`] | YAML front-matter fence splitting and deserialization |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Shared types serialized between stages (`ArticleRecord`, `IndexPage`, `Manifest`) |
//! | [`naming`] | Path stem → URL mapping (pretty URLs, `index` collapsing) |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Filename-Driven Ordering
//!
//! Articles are ordered by lexicographic comparison of their path stems
//! (`python/01-intro` before `python/02-variables`), never by date. A course
//! is read front to back; updating an old article must not reshuffle it. Gaps
//! and non-numeric names are fine — only the string ordering matters. The
//! filesystem is the source of truth: no database, no separate ordering file.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Sections Live on the Index Page
//!
//! Group labels and section titles are declared once, in the collection's
//! `index.md`, and articles point into that table with small numeric indices
//! (`section_index`, `group_index`). Renaming a section is a one-file edit.
//! The scan stage validates every reference up front, so a dangling index is
//! a build error rather than a silently missing label.
//!
//! ## Local Ordering State
//!
//! Group labels are emitted by comparing each article's group against the
//! previous row while walking one section's list ([`ordering::grouped_rows`]).
//! That cursor is local to a single call, so article pages render in parallel
//! ([rayon](https://docs.rs/rayon)) with no shared state.
//!
//! ## No Built-In Server
//!
//! The output is plain HTML, CSS, and a few lines of vanilla JavaScript.
//! Preview with any static file server (`python3 -m http.server dist`); the
//! generated site can be dropped on any host — no Node, no database.

pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod markdown;
pub mod naming;
pub mod ordering;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;
