//! CLI output formatting for the scan and generate stages.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity (collection, article) is its semantic identity — title and
//! positional index — with source files shown as secondary context via
//! indented `Source:` lines.
//!
//! ```text
//! Collections
//! 001 Python Short-Tutorials (3 articles)
//!     Source: python/index.md
//!     001 Intro
//!         Source: python/01-intro.md
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::ordering;
use crate::types::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    if manifest.home.is_some() {
        lines.push("Home".to_string());
        lines.push(format!("{}Source: index.md", indent(1)));
        lines.push(String::new());
    }

    lines.push("Collections".to_string());
    for (i, index) in manifest.indexes.iter().enumerate() {
        let members = ordering::sorted_collection(&manifest.articles, &index.collection);
        let detail = if index.sections.is_empty() {
            format!("{} articles", members.len())
        } else {
            format!("{} articles, {} sections", members.len(), index.sections.len())
        };
        lines.push(format!("{} {} ({})", format_index(i + 1), index.title, detail));
        lines.push(format!("{}Source: {}.md", indent(1), index.path_stem));
        for (j, article) in members.iter().enumerate() {
            let unlisted = if article.unlisted { " (unlisted)" } else { "" };
            lines.push(format!(
                "{}{} {}{}",
                indent(1),
                format_index(j + 1),
                article.title,
                unlisted
            ));
            lines.push(format!("{}Source: {}.md", indent(2), article.path_stem));
        }
    }

    let orphans = orphan_tags(manifest);
    if !orphans.is_empty() {
        lines.push(String::new());
        lines.push("Collections without an index page".to_string());
        for tag in orphans {
            let count = ordering::sorted_collection(&manifest.articles, tag).len();
            lines.push(format!("{}{} ({} articles)", indent(1), tag, count));
        }
    }

    lines
}

/// Tags whose articles have no index page, in sorted order.
fn orphan_tags(manifest: &Manifest) -> Vec<&str> {
    let mut tags: Vec<&str> = manifest
        .articles
        .iter()
        .map(|a| a.tags.as_str())
        .filter(|tag| manifest.index_for(tag).is_none())
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}

pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());
    for (i, index) in manifest.indexes.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}index.html",
            format_index(i + 1),
            index.title,
            index.url.trim_start_matches('/')
        ));
        let members = ordering::sorted_collection(&manifest.articles, &index.collection);
        for (j, article) in members.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}index.html",
                indent(1),
                format_index(j + 1),
                article.title,
                article.url.trim_start_matches('/')
            ));
        }
    }
    lines.push("404 → 404.html".to_string());
    if !manifest.config.base_url.is_empty() {
        lines.push("Sitemap → sitemap.xml".to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} index pages, {} article pages",
        manifest.indexes.len(),
        manifest.articles.len()
    ));
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::types::{ArticleRecord, HomePage, IndexPage};

    fn article(stem: &str, title: &str, tag: &str) -> ArticleRecord {
        ArticleRecord {
            path_stem: stem.to_string(),
            title: title.to_string(),
            url: format!("/{stem}/"),
            tags: tag.to_string(),
            section_index: None,
            group_index: None,
            unlisted: false,
            video_id: None,
            last_update: None,
            body: String::new(),
        }
    }

    fn test_manifest() -> Manifest {
        Manifest {
            home: Some(HomePage {
                title: "Home".to_string(),
                body: String::new(),
            }),
            indexes: vec![IndexPage {
                path_stem: "python/index".to_string(),
                title: "Python Short-Tutorials".to_string(),
                url: "/python/".to_string(),
                collection: "python".to_string(),
                sections: vec![],
                body: String::new(),
            }],
            articles: vec![
                article("python/01-intro", "Intro", "python"),
                article("python/02-vars", "Variables", "python"),
                article("drafts/01-wip", "WIP", "drafts"),
            ],
            config: SiteConfig::default(),
        }
    }

    #[test]
    fn scan_output_lists_collections_with_counts() {
        let lines = format_scan_output(&test_manifest());
        let joined = lines.join("\n");

        assert!(joined.contains("001 Python Short-Tutorials (2 articles)"));
        assert!(joined.contains("    001 Intro"));
        assert!(joined.contains("        Source: python/01-intro.md"));
    }

    #[test]
    fn scan_output_flags_orphan_collections() {
        let lines = format_scan_output(&test_manifest());
        let joined = lines.join("\n");

        assert!(joined.contains("Collections without an index page"));
        assert!(joined.contains("drafts (1 articles)"));
    }

    #[test]
    fn scan_output_marks_unlisted_articles() {
        let mut manifest = test_manifest();
        manifest.articles[1].unlisted = true;

        let joined = format_scan_output(&manifest).join("\n");
        assert!(joined.contains("002 Variables (unlisted)"));
    }

    #[test]
    fn generate_output_maps_pages_to_files() {
        let joined = format_generate_output(&test_manifest()).join("\n");

        assert!(joined.contains("Home → index.html"));
        assert!(joined.contains("001 Python Short-Tutorials → python/index.html"));
        assert!(joined.contains("    001 Intro → python/01-intro/index.html"));
        assert!(joined.contains("Generated 1 index pages, 3 article pages"));
    }

    #[test]
    fn generate_output_mentions_sitemap_only_with_base_url() {
        let mut manifest = test_manifest();
        assert!(!format_generate_output(&manifest).join("\n").contains("sitemap"));

        manifest.config.base_url = "https://example.com".to_string();
        assert!(format_generate_output(&manifest).join("\n").contains("Sitemap → sitemap.xml"));
    }
}
