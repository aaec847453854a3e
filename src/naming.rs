//! Path-stem and URL derivation for content files.
//!
//! Every content file is identified by its **path stem**: the content-relative
//! path with the extension removed and separators normalized to `/`. The stem
//! is unique, sorts lexicographically, and is the canonical ordering key for
//! a collection — authors control reading order purely through filenames
//! (`01-intro.md`, `02-vars.md`, ...).
//!
//! URLs are "pretty": every page lands at `/{stem}/index.html` and is linked
//! as `/{stem}/`. An `index` stem collapses into its parent directory, so
//! `python/index.md` becomes `/python/` and the root `index.md` becomes `/`.

use std::path::Path;

/// Derive the path stem from a content-relative path.
///
/// - `python/01-intro.md` → `python/01-intro`
/// - `index.md` → `index`
/// - backslashes (Windows paths) are normalized to `/`
pub fn path_stem(rel_path: &Path) -> String {
    let stem = rel_path.with_extension("");
    stem.to_string_lossy().replace('\\', "/")
}

/// Resolve the output URL for a path stem.
///
/// - `index` → `/`
/// - `python/index` → `/python/`
/// - `python/01-intro` → `/python/01-intro/`
pub fn url_for_stem(stem: &str) -> String {
    let trimmed = stem
        .strip_suffix("/index")
        .or_else(|| (stem == "index").then_some(""))
        .unwrap_or(stem);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Convert a URL back to an output directory path relative to `dist/`.
///
/// - `/` → `` (the output root)
/// - `/python/01-intro/` → `python/01-intro`
pub fn output_dir_for_url(url: &str) -> &str {
    url.trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_extension() {
        assert_eq!(path_stem(Path::new("python/01-intro.md")), "python/01-intro");
    }

    #[test]
    fn stem_of_root_index() {
        assert_eq!(path_stem(Path::new("index.md")), "index");
    }

    #[test]
    fn stem_normalizes_backslashes() {
        assert_eq!(path_stem(Path::new("python\\01-intro.md")), "python/01-intro");
    }

    #[test]
    fn url_for_article_stem() {
        assert_eq!(url_for_stem("python/01-intro"), "/python/01-intro/");
    }

    #[test]
    fn url_for_index_stem_collapses() {
        assert_eq!(url_for_stem("python/index"), "/python/");
    }

    #[test]
    fn url_for_root_index_is_slash() {
        assert_eq!(url_for_stem("index"), "/");
    }

    #[test]
    fn url_for_nested_index() {
        assert_eq!(url_for_stem("flask-2-tutorial/v1/index"), "/flask-2-tutorial/v1/");
    }

    #[test]
    fn output_dir_roundtrip() {
        assert_eq!(output_dir_for_url("/python/01-intro/"), "python/01-intro");
        assert_eq!(output_dir_for_url("/"), "");
    }

    #[test]
    fn stems_sort_in_reading_order() {
        let mut stems = vec!["python/03-loops", "python/01-intro", "python/02-vars"];
        stems.sort();
        assert_eq!(stems, vec!["python/01-intro", "python/02-vars", "python/03-loops"]);
    }
}
