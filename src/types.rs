//! Shared types serialized between the scan and generate stages.
//!
//! The scan stage writes these as `manifest.json`; the generate stage reads
//! them back. Keeping the contract in one module guarantees both stages agree
//! on the shape.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tutorial article, parsed from a markdown file with YAML front matter.
///
/// The `path_stem` is the content-relative file path without its extension
/// (`python/01-intro.md` → `python/01-intro`). It is unique within a
/// collection, and its lexicographic order *is* the reading order — there is
/// no separate manual ordering field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Unique, sortable identifier; canonical ordering key for the collection.
    pub path_stem: String,
    /// Display title from front matter.
    pub title: String,
    /// Pretty output URL (`/python/01-intro/`).
    pub url: String,
    /// Collection this article belongs to (the `tags` front matter value).
    pub tags: String,
    /// Section (chapter) within a sectioned index page. `None` = ungrouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_index: Option<usize>,
    /// Sub-group label key within the section. `None` = no label row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_index: Option<u32>,
    /// Excluded from next-article sequencing (still listed and reachable).
    #[serde(default)]
    pub unlisted: bool,
    /// YouTube video id for the deferred click-to-load embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Human-readable date of the last content update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    /// Raw markdown body (front matter stripped).
    pub body: String,
}

/// A declared chapter grouping within a sectioned index page.
///
/// Sections are declared by the index page's front matter, in display order.
/// Articles point back into this sequence via `section_index`, and into
/// `groups` via `group_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Group label table, keyed by `group_index`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<u32, String>,
}

/// A category index page: a markdown file declaring `collection: <tag>`.
///
/// Renders either a flat numbered list (no sections declared) or a sectioned
/// list with group labels. Index pages are excluded from the collection they
/// index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPage {
    pub path_stem: String,
    pub title: String,
    pub url: String,
    /// The collection tag this page lists.
    pub collection: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    /// Intro markdown shown above the article list.
    pub body: String,
}

/// The site home page, from `content/index.md`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub title: String,
    /// Intro markdown shown in the home header.
    pub body: String,
}

/// Manifest output from the scan stage — the complete site as data.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<HomePage>,
    pub indexes: Vec<IndexPage>,
    pub articles: Vec<ArticleRecord>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Look up the index page for a collection tag.
    ///
    /// Explicit lookup with a defined miss: `None` means the collection has
    /// no index page, and callers fall back to the raw tag for display.
    pub fn index_for(&self, tag: &str) -> Option<&IndexPage> {
        self.indexes.iter().find(|idx| idx.collection == tag)
    }

    /// Display name for a collection: its index page title, or the tag itself.
    pub fn collection_name<'a>(&'a self, tag: &'a str) -> &'a str {
        self.index_for(tag)
            .map(|idx| idx.title.as_str())
            .unwrap_or(tag)
    }
}
