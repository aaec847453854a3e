//! End-to-end pipeline test: write a content tree, scan it, generate the
//! site, and assert on the emitted HTML.

use simple_course::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small two-collection course: flat Python plus a sectioned Flask course
/// with group labels and an unlisted article.
fn write_course(root: &Path) {
    write(
        root,
        "config.toml",
        "site_name = \"Code Cookies\"\ntagline = \"Short and friendly tutorials.\"\nbase_url = \"https://codecookies.xyz\"\nsource_repo = \"https://github.com/example/content\"\n",
    );
    write(
        root,
        "index.md",
        "---\ntitle: Home\n---\nShort and friendly coding tutorials.\n",
    );
    write(root, "assets/favicon.ico", "icon");

    write(
        root,
        "python/index.md",
        "---\ntitle: Python Short-Tutorials\ncollection: python\n---\nLearn Python step by step.\n",
    );
    write(
        root,
        "python/01-intro.md",
        "---\ntitle: Intro\ntags: python\nlast_update: \"2023-01-15\"\n---\n## Getting Started\n\nHello.\n",
    );
    write(
        root,
        "python/02-variables.md",
        "---\ntitle: Variables\ntags: python\nvideo_id: abc123\n---\nVariables hold values.\n",
    );

    write(
        root,
        "flask-2/index.md",
        "---\ntitle: Flask 2 Course\ncollection: flask-2\nsections:\n  - title: Fundamentals\n    groups:\n      0: Basics\n      1: Templating\n  - title: Deployment\n    groups: {}\n---\nBuild web apps with Flask.\n",
    );
    write(
        root,
        "flask-2/01.1-setup.md",
        "---\ntitle: Setup\ntags: flask-2\nsection_index: 0\ngroup_index: 0\n---\nInstall Flask.\n",
    );
    write(
        root,
        "flask-2/01.2-routing.md",
        "---\ntitle: Routing\ntags: flask-2\nsection_index: 0\ngroup_index: 0\n---\nRoutes map URLs.\n",
    );
    write(
        root,
        "flask-2/01.3-jinja.md",
        "---\ntitle: Jinja Templates\ntags: flask-2\nsection_index: 0\ngroup_index: 1\n---\nRender HTML.\n",
    );
    write(
        root,
        "flask-2/02.1-deploy.md",
        "---\ntitle: Deploying\ntags: flask-2\nsection_index: 1\n---\nShip it.\n",
    );
    write(
        root,
        "flask-2/99-scratch.md",
        "---\ntitle: Scratchpad\ntags: flask-2\nunlisted: true\n---\nNotes.\n",
    );
}

// Source dirs need a non-hidden name: `scan` skips hidden entries, and a
// plain `TempDir::new()` yields a `.tmp*` directory that the walk would
// filter out as its own root.
fn source_dir() -> TempDir {
    tempfile::Builder::new().prefix("course").tempdir().unwrap()
}

fn build_site() -> (TempDir, TempDir) {
    let source = source_dir();
    let output = TempDir::new().unwrap();
    write_course(source.path());

    let manifest = scan::scan(source.path()).unwrap();
    generate::generate(&manifest, source.path(), output.path()).unwrap();
    (source, output)
}

fn read_page(output: &TempDir, rel: &str) -> String {
    fs::read_to_string(output.path().join(rel)).unwrap()
}

#[test]
fn home_page_lists_collections() {
    let (_source, output) = build_site();
    let home = read_page(&output, "index.html");

    assert!(home.contains("Code Cookies"));
    assert!(home.contains("href=\"/python/\""));
    assert!(home.contains("Python Short-Tutorials"));
    assert!(home.contains("href=\"/flask-2/\""));
    assert!(home.contains("Short and friendly coding tutorials."));
}

#[test]
fn flat_index_numbers_articles_in_filename_order() {
    let (_source, output) = build_site();
    let index = read_page(&output, "python/index.html");

    let intro = index.find("1. Intro").unwrap();
    let vars = index.find("2. Variables").unwrap();
    assert!(intro < vars);
    assert!(index.contains("href=\"/python/01-intro/\""));
}

#[test]
fn sectioned_index_emits_group_labels_and_drops_sectionless() {
    let (_source, output) = build_site();
    let index = read_page(&output, "flask-2/index.html");

    assert!(index.contains("Fundamentals"));
    assert!(index.contains("Deployment"));
    assert!(index.contains("Basics:"));
    assert!(index.contains("Templating:"));

    // Numbering is continuous across groups within a section.
    let setup = index.find("1. Setup").unwrap();
    let routing = index.find("2. Routing").unwrap();
    let jinja = index.find("3. Jinja Templates").unwrap();
    assert!(setup < routing && routing < jinja);

    // "Basics" labels the first group once, then "Templating" follows.
    let basics = index.find("Basics:").unwrap();
    let templating = index.find("Templating:").unwrap();
    assert!(basics < setup && jinja > templating && templating > routing);

    // The scratchpad declares no section, so it appears in no section list.
    assert!(!index.contains("Scratchpad"));
}

#[test]
fn article_pages_link_to_the_next_article() {
    let (_source, output) = build_site();

    let intro = read_page(&output, "python/01-intro/index.html");
    assert!(intro.contains("Next: Variables"));
    assert!(intro.contains("href=\"/python/02-variables/\""));

    // Last article in the collection has no next link.
    let vars = read_page(&output, "python/02-variables/index.html");
    assert!(!vars.contains("Next:"));

    // The unlisted scratchpad is skipped: deploy's next would be it.
    let deploy = read_page(&output, "flask-2/02.1-deploy/index.html");
    assert!(!deploy.contains("Next:"));
}

#[test]
fn article_page_renders_markdown_with_anchored_headings() {
    let (_source, output) = build_site();
    let intro = read_page(&output, "python/01-intro/index.html");

    assert!(intro.contains("id=\"getting-started\""));
    assert!(intro.contains("href=\"#getting-started\""));
    assert!(intro.contains("Last content update 2023-01-15"));
    assert!(intro.contains("https://github.com/example/content/commits/main/python/01-intro.md"));
}

#[test]
fn article_video_embed_is_deferred() {
    let (_source, output) = build_site();
    let vars = read_page(&output, "python/02-variables/index.html");

    assert!(vars.contains("showVideo('abc123')"));
    assert!(!vars.contains("youtube-nocookie.com/embed"));
}

#[test]
fn unlisted_article_still_gets_a_page_and_sitemap_entry() {
    let (_source, output) = build_site();

    let scratch = read_page(&output, "flask-2/99-scratch/index.html");
    assert!(scratch.contains("Scratchpad"));

    let sitemap = read_page(&output, "sitemap.xml");
    assert!(sitemap.contains("<loc>https://codecookies.xyz/flask-2/99-scratch/</loc>"));
    assert!(sitemap.contains("<loc>https://codecookies.xyz/</loc>"));
    assert!(sitemap.contains("<loc>https://codecookies.xyz/python/</loc>"));
}

#[test]
fn not_found_page_and_assets_are_emitted() {
    let (_source, output) = build_site();

    let not_found = read_page(&output, "404.html");
    assert!(not_found.contains("404"));
    assert!(not_found.contains("href=\"/\""));

    assert_eq!(read_page(&output, "assets/favicon.ico"), "icon");
}

#[test]
fn manifest_round_trips_through_json() {
    let source = source_dir();
    write_course(source.path());

    let manifest = scan::scan(source.path()).unwrap();
    let json = serde_json::to_string_pretty(&manifest).unwrap();
    let parsed: simple_course::types::Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, manifest);
}

#[test]
fn scan_rejects_dangling_section_reference() {
    let source = source_dir();
    write_course(source.path());
    write(
        source.path(),
        "flask-2/03.1-extra.md",
        "---\ntitle: Extra\ntags: flask-2\nsection_index: 5\n---\nBody.\n",
    );

    assert!(scan::scan(source.path()).is_err());
}
