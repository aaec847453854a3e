//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content tree, parses front
//! matter, classifies every markdown file, and produces the [`Manifest`]
//! the generate stage consumes.
//!
//! ## Content Structure
//!
//! ```text
//! content/
//! ├── config.toml                  # Site config (optional)
//! ├── assets/                      # Static assets → copied to output root
//! ├── index.md                     # Home page intro
//! ├── development-basics/
//! │   ├── index.md                 # Index page: `collection: development-basics`
//! │   ├── 01-what-is-code.md       # Article: `tags: development-basics`
//! │   └── 02-the-terminal.md
//! └── flask-2-tutorial/v1/
//!     ├── index.md                 # Sectioned index: declares `sections:`
//!     ├── 01-setup.md              # Article with section_index/group_index
//!     └── 02-routes.md
//! ```
//!
//! ## Classification
//!
//! - `index.md` at the content root → home page
//! - front matter with `collection:` → category index page
//! - front matter with `tags:` → article
//! - anything else → content error
//!
//! ## Validation
//!
//! Content errors fail the whole build and point at the offending file:
//! - missing `title` on an article or index page
//! - a file that is neither article, index page, nor home
//! - two index pages claiming the same collection
//! - `section_index` / `group_index` that do not resolve against the
//!   collection's declared sections (only checked when the collection's
//!   index page declares sections — a flat index ignores both fields)

use crate::config::{self, SiteConfig};
use crate::frontmatter::{self, FrontMatter, FrontMatterError};
use crate::naming;
use crate::types::{ArticleRecord, HomePage, IndexPage, Manifest};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
    #[error("{path}: missing required front matter field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    #[error("{path}: file declares neither `tags` nor `collection` (and is not the home page)")]
    UnclassifiedFile { path: PathBuf },
    #[error("{path}: file declares both `tags` and `collection`")]
    AmbiguousRole { path: PathBuf },
    #[error("{path}: duplicate index page for collection `{collection}`")]
    DuplicateIndexPage { path: PathBuf, collection: String },
    #[error("{path}: section_index {section_index} is out of range ({section_count} sections declared by the `{collection}` index page)")]
    SectionIndexOutOfRange {
        path: PathBuf,
        section_index: usize,
        section_count: usize,
        collection: String,
    },
    #[error("{path}: group_index {group_index} is not declared in the groups of section {section_index}")]
    UnknownGroupIndex {
        path: PathBuf,
        group_index: u32,
        section_index: usize,
    },
    #[error("{path}: group_index requires a section_index")]
    GroupWithoutSection { path: PathBuf },
}

/// Scan a content directory into a [`Manifest`].
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let site_config = config::load_config(root)?;

    let mut home = None;
    let mut indexes: Vec<IndexPage> = Vec::new();
    let mut articles: Vec<ArticleRecord> = Vec::new();

    for path in collect_markdown_files(root)? {
        let rel = path.strip_prefix(root).unwrap_or(&path);
        let stem = naming::path_stem(rel);
        let source = fs::read_to_string(&path)?;
        let (matter, body) =
            frontmatter::extract(&source).map_err(|source| ScanError::FrontMatter {
                path: path.clone(),
                source,
            })?;
        let matter = matter.unwrap_or_default();

        if stem == "index" {
            home = Some(HomePage {
                title: matter.title.unwrap_or_else(|| "Home".to_string()),
                body: body.to_string(),
            });
            continue;
        }

        match classify(&path, &matter)? {
            Role::Index(collection) => {
                if indexes.iter().any(|idx| idx.collection == collection) {
                    return Err(ScanError::DuplicateIndexPage { path, collection });
                }
                indexes.push(build_index_page(&path, stem, collection, matter, body)?);
            }
            Role::Article(tags) => {
                articles.push(build_article(&path, stem, tags, matter, body)?);
            }
        }
    }

    validate_section_references(root, &indexes, &articles)?;

    indexes.sort_by(|a, b| a.path_stem.cmp(&b.path_stem));
    articles.sort_by(|a, b| a.path_stem.cmp(&b.path_stem));

    Ok(Manifest {
        home,
        indexes,
        articles,
        config: site_config,
    })
}

enum Role {
    Index(String),
    Article(String),
}

fn classify(path: &Path, matter: &FrontMatter) -> Result<Role, ScanError> {
    match (&matter.collection, &matter.tags) {
        (Some(_), Some(_)) => Err(ScanError::AmbiguousRole {
            path: path.to_path_buf(),
        }),
        (Some(collection), None) => Ok(Role::Index(collection.clone())),
        (None, Some(tags)) => Ok(Role::Article(tags.clone())),
        (None, None) => Err(ScanError::UnclassifiedFile {
            path: path.to_path_buf(),
        }),
    }
}

/// All `.md` files under the root, skipping hidden entries and `assets/`.
fn collect_markdown_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let name = entry.file_name().to_string_lossy();
        !name.starts_with('.') && !(entry.depth() == 1 && name == "assets")
    });
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map(|e| e.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn build_index_page(
    path: &Path,
    stem: String,
    collection: String,
    matter: FrontMatter,
    body: &str,
) -> Result<IndexPage, ScanError> {
    let title = matter.title.ok_or_else(|| ScanError::MissingField {
        path: path.to_path_buf(),
        field: "title",
    })?;
    let url = naming::url_for_stem(&stem);
    Ok(IndexPage {
        path_stem: stem,
        title,
        url,
        collection,
        sections: matter.sections,
        body: body.to_string(),
    })
}

fn build_article(
    path: &Path,
    stem: String,
    tags: String,
    matter: FrontMatter,
    body: &str,
) -> Result<ArticleRecord, ScanError> {
    let title = matter.title.ok_or_else(|| ScanError::MissingField {
        path: path.to_path_buf(),
        field: "title",
    })?;
    if matter.group_index.is_some() && matter.section_index.is_none() {
        return Err(ScanError::GroupWithoutSection {
            path: path.to_path_buf(),
        });
    }
    let url = naming::url_for_stem(&stem);
    Ok(ArticleRecord {
        path_stem: stem,
        title,
        url,
        tags,
        section_index: matter.section_index,
        group_index: matter.group_index,
        unlisted: matter.unlisted,
        video_id: matter.video_id,
        last_update: matter.last_update,
        body: body.to_string(),
    })
}

/// Cross-check article section/group references against their collection's
/// declared sections.
///
/// Only collections whose index page declares at least one section are
/// checked: a flat index never reads `section_index`, and a collection
/// without an index page has no section table to validate against.
fn validate_section_references(
    root: &Path,
    indexes: &[IndexPage],
    articles: &[ArticleRecord],
) -> Result<(), ScanError> {
    for article in articles {
        let Some(index) = indexes.iter().find(|idx| idx.collection == article.tags) else {
            continue;
        };
        if index.sections.is_empty() {
            continue;
        }
        let path = root.join(format!("{}.md", article.path_stem));
        if let Some(section_index) = article.section_index {
            let Some(section) = index.sections.get(section_index) else {
                return Err(ScanError::SectionIndexOutOfRange {
                    path,
                    section_index,
                    section_count: index.sections.len(),
                    collection: index.collection.clone(),
                });
            };
            if let Some(group_index) = article.group_index
                && !section.groups.contains_key(&group_index)
            {
                return Err(ScanError::UnknownGroupIndex {
                    path,
                    group_index,
                    section_index,
                });
            }
        }
    }
    Ok(())
}
