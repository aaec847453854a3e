//! YAML front matter extraction.
//!
//! Content files open with a fenced YAML header:
//!
//! ```text
//! ---
//! title: Introduction
//! tags: python
//! section_index: 0
//! group_index: 1
//! ---
//! Markdown body...
//! ```
//!
//! A file without an opening fence has no front matter at all (the whole file
//! is body). An opening fence without a closing fence is an authoring error.

use crate::types::Section;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing closing front matter fence")]
    MissingEndFence,
    #[error("invalid front matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Every field a content file may declare in its header.
///
/// All fields are optional at this layer; the scan stage decides which are
/// required for which page role (article, index page, home).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Collection membership — marks the file as an article.
    pub tags: Option<String>,
    /// Collection to index — marks the file as a category index page.
    pub collection: Option<String>,
    /// Section declarations for a sectioned index page.
    pub sections: Vec<Section>,
    pub section_index: Option<usize>,
    pub group_index: Option<u32>,
    pub unlisted: bool,
    pub video_id: Option<String>,
    pub last_update: Option<String>,
}

const FENCE: &str = "---";

/// Split a source file into front matter and body.
///
/// Returns `(None, source)` when the file does not start with a fence. The
/// closing fence must start a line of its own.
pub fn extract(source: &str) -> Result<(Option<FrontMatter>, &str), FrontMatterError> {
    if !source.starts_with(FENCE) {
        return Ok((None, source));
    }
    let after_open = &source[FENCE.len()..];
    let Some(offset) = after_open.find("\n---") else {
        return Err(FrontMatterError::MissingEndFence);
    };
    let yaml = &after_open[..offset];
    let rest = &after_open[offset + 1 + FENCE.len()..];
    let body = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    let matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };
    Ok((Some(matter), body))
}
