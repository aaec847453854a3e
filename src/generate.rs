//! Static site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and writes the
//! final site:
//!
//! ```text
//! dist/
//! ├── index.html                 # Home page
//! ├── 404.html
//! ├── sitemap.xml                # Only when base_url is configured
//! ├── assets/                    # Copied from content/assets/
//! ├── python/
//! │   ├── index.html             # Category index page
//! │   └── 01-intro/
//! │       └── index.html         # Article page (pretty URL)
//! └── ...
//! ```
//!
//! Article pages are rendered in parallel with
//! [rayon](https://docs.rs/rayon). Each render call builds its own ordering
//! state, so parallelism needs no coordination.

use crate::naming;
use crate::render;
use crate::types::Manifest;
use maud::Markup;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render every page of the site into `output_dir`.
pub fn generate(manifest: &Manifest, source_dir: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;

    write_page(output_dir, "/", render::render_home(manifest))?;

    for index in &manifest.indexes {
        write_page(output_dir, &index.url, render::render_index_page(index, manifest))?;
    }

    manifest.articles.par_iter().try_for_each(|article| {
        write_page(
            output_dir,
            &article.url,
            render::render_article_page(article, manifest),
        )
    })?;

    fs::write(
        output_dir.join("404.html"),
        render::render_not_found(manifest).into_string(),
    )?;

    let assets = source_dir.join("assets");
    if assets.is_dir() {
        copy_dir_recursive(&assets, &output_dir.join("assets"))?;
    }

    if !manifest.config.base_url.is_empty() {
        fs::write(output_dir.join("sitemap.xml"), sitemap_xml(manifest))?;
    }

    Ok(())
}

/// Write a page at its pretty URL: `{output}/{url}/index.html`.
fn write_page(output_dir: &Path, url: &str, markup: Markup) -> Result<(), GenerateError> {
    let dir = output_dir.join(naming::output_dir_for_url(url));
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("index.html"), markup.into_string())?;
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Sitemap over every page except 404: home, index pages, then articles,
/// all in manifest (path-stem) order.
pub fn sitemap_xml(manifest: &Manifest) -> String {
    let base = &manifest.config.base_url;
    let mut urls = vec!["/".to_string()];
    urls.extend(manifest.indexes.iter().map(|idx| idx.url.clone()));
    urls.extend(manifest.articles.iter().map(|a| a.url.clone()));

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in urls {
        xml.push_str(&format!("  <url><loc>{}</loc></url>\n", xml_escape(&format!("{base}{url}"))));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
