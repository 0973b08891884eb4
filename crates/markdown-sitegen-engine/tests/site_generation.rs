use std::fs;
use std::path::Path;

use markdown_sitegen_engine::{SiteError, SiteLayout, build_site};
use pretty_assertions::assert_eq;
use relative_path::RelativePathBuf;
use tempfile::TempDir;

const TEMPLATE: &str = "<html><head><title>{{ Title }}</title><link href=\"{{ BasePath }}index.css\"></head><body>{{ Content }}</body></html>";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn layout(root: &Path, prettify: bool) -> SiteLayout {
    SiteLayout {
        content_dir: root.join("content"),
        static_dir: root.join("static"),
        public_dir: root.join("public"),
        template_path: root.join("template.html"),
        base_path: "/site/".to_string(),
        prettify,
    }
}

fn sample_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "template.html", TEMPLATE);
    write(root, "static/index.css", "body { margin: 0 }");
    write(root, "static/images/logo.png", "not really a png");
    write(root, "content/index.md", "# Home\n\nWelcome to **the site**.");
    write(
        root,
        "content/blog/first/index.md",
        "# First Post\n\n- one\n- two",
    );
    write(root, "content/notes.txt", "ignored");
    dir
}

#[test]
fn builds_pages_and_copies_static_assets() {
    let dir = sample_site();
    let root = dir.path();

    let report = build_site(&layout(root, false)).unwrap();

    assert_eq!(report.static_files, 2);
    assert_eq!(
        report.pages,
        vec![
            RelativePathBuf::from("blog/first/index.html"),
            RelativePathBuf::from("index.html"),
        ]
    );

    assert_eq!(
        fs::read_to_string(root.join("public/index.html")).unwrap(),
        "<html><head><title>Home</title><link href=\"/site/index.css\"></head><body><div><h1>Home</h1><p>Welcome to <b>the site</b>.</p></div></body></html>"
    );
    assert_eq!(
        fs::read_to_string(root.join("public/images/logo.png")).unwrap(),
        "not really a png"
    );
    assert!(root.join("public/blog/first/index.html").is_file());
    assert!(!root.join("public/notes.html").exists());
}

#[test]
fn rebuild_removes_stale_output() {
    let dir = sample_site();
    let root = dir.path();
    write(root, "public/stale.html", "old");

    build_site(&layout(root, false)).unwrap();

    assert!(!root.join("public/stale.html").exists());
    assert!(root.join("public/index.html").is_file());
}

#[test]
fn prettified_pages_put_tags_on_their_own_lines() {
    let dir = sample_site();
    let root = dir.path();

    build_site(&layout(root, true)).unwrap();

    let page = fs::read_to_string(root.join("public/blog/first/index.html")).unwrap();
    assert!(page.lines().any(|line| line.trim() == "<li>"));
    assert!(page.lines().any(|line| line.trim() == "First Post"));
    assert!(page.ends_with('\n'));
}

#[test]
fn page_without_h1_fails_the_build() {
    let dir = sample_site();
    let root = dir.path();
    write(root, "content/untitled.md", "## Only a subheading");

    let err = build_site(&layout(root, false)).unwrap_err();
    assert!(matches!(err, SiteError::MissingTitle { path } if path.ends_with("untitled.md")));
}

#[test]
fn markdown_errors_name_the_page() {
    let dir = sample_site();
    let root = dir.path();
    write(root, "content/broken.md", "# Broken\n\nan **unclosed run");

    let err = build_site(&layout(root, false)).unwrap_err();
    assert!(matches!(err, SiteError::Markdown { path, .. } if path.ends_with("broken.md")));
}

#[test]
fn missing_template_is_reported() {
    let dir = sample_site();
    let root = dir.path();
    fs::remove_file(root.join("template.html")).unwrap();

    let err = build_site(&layout(root, false)).unwrap_err();
    assert!(matches!(err, SiteError::NotFound(path) if path.ends_with("template.html")));
}
