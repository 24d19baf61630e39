//! Integration tests for static site generation

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

mod common;
use common::{folio_cmd, init_site, sample_site};

#[test]
fn test_build_generates_site() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());

    folio_cmd()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 14 pages (3 posts, 2 snippets)"));

    let out = temp.path().join("out");
    let mut files: Vec<String> = WalkDir::new(&out)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(&out)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();

    assert_eq!(
        files,
        vec![
            "about/index.html",
            "blogs/go-basics/index.html",
            "blogs/index.html",
            "blogs/react-hooks/index.html",
            "blogs/tags/css/index.html",
            "blogs/tags/go/index.html",
            "blogs/tags/react/index.html",
            "blogs/tailwind-react/index.html",
            "index.html",
            "robots.txt",
            "sitemap.xml",
            "snippets/debounce/index.html",
            "snippets/index.html",
            "snippets/use-fetch/index.html",
        ]
    );
}

#[test]
fn test_build_home_page_shows_recent_posts() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());
    folio_cmd()
        .current_dir(temp.path())
        .args(["config", "recent_posts", "2"])
        .assert()
        .success();

    folio_cmd().current_dir(temp.path()).arg("build").assert().success();

    let html = fs::read_to_string(temp.path().join("out/index.html")).unwrap();
    assert!(html.contains("React Hooks"));
    assert!(html.contains("Styling React with Tailwind"));
    assert!(!html.contains("Go Basics"));
}

#[test]
fn test_build_post_page() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());
    folio_cmd().current_dir(temp.path()).arg("build").assert().success();

    let html =
        fs::read_to_string(temp.path().join("out/blogs/react-hooks/index.html")).unwrap();
    assert!(html.contains("<title>React Hooks - Dev Blog</title>"));
    assert!(html.contains("<h2 id=\"overview\"><a href=\"#overview\">Overview</a></h2>"));
    assert!(html.contains("<a href=\"/blogs/tags/react\">react</a>"));
}

#[test]
fn test_build_tag_pages_filter_posts() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());
    folio_cmd().current_dir(temp.path()).arg("build").assert().success();

    let react = fs::read_to_string(temp.path().join("out/blogs/tags/react/index.html")).unwrap();
    assert!(react.contains("React Hooks"));
    assert!(react.contains("Styling React with Tailwind"));
    assert!(!react.contains("Go Basics"));
    assert!(react.contains("<a class=\"tag active\" href=\"/blogs\">react</a>"));
    assert!(react.contains("<a class=\"tag\" href=\"/blogs/tags/go\">go</a>"));

    let index = fs::read_to_string(temp.path().join("out/blogs/index.html")).unwrap();
    assert!(index.contains("href=\"/blogs/tags/css\""));
    assert!(!index.contains("/blogs?"));
    assert!(!index.contains("<form"));
}

#[test]
fn test_build_about_page() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());
    fs::write(
        temp.path().join("content/about.mdx"),
        "---\ntitle: About Me\ndescription: Frontend developer\n---\nI build things for the web.\n",
    )
    .unwrap();

    folio_cmd().current_dir(temp.path()).arg("build").assert().success();

    let html = fs::read_to_string(temp.path().join("out/about/index.html")).unwrap();
    assert!(html.contains("<h1>About Me</h1>"));
    assert!(html.contains("I build things for the web."));
    assert!(html.contains("content=\"Frontend developer\""));

    let home = fs::read_to_string(temp.path().join("out/index.html")).unwrap();
    assert!(home.contains("<a href=\"/about\">About</a>"));

    let sitemap = fs::read_to_string(temp.path().join("out/sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://example.dev/about</loc>"));
}

#[test]
fn test_build_with_relative_folio_root() {
    let parent = TempDir::new().unwrap();
    let site = parent.path().join("site");
    sample_site(&site);

    folio_cmd()
        .current_dir(parent.path())
        .env("FOLIO_ROOT", "site")
        .arg("build")
        .assert()
        .success();

    assert!(site.join("out/index.html").is_file());
    assert!(!site.join("site").exists());
}

#[test]
fn test_build_ignores_plain_markdown_twin() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());
    fs::copy(
        temp.path().join("content/posts/go-basics.mdx"),
        temp.path().join("content/posts/go-basics.md"),
    )
    .unwrap();

    folio_cmd()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 posts, 2 snippets)"));

    let sitemap = fs::read_to_string(temp.path().join("out/sitemap.xml")).unwrap();
    assert_eq!(sitemap.matches("/blogs/go-basics</loc>").count(), 1);
}

#[test]
fn test_build_sitemap_uses_site_url_env() {
    let temp = TempDir::new().unwrap();
    sample_site(temp.path());

    folio_cmd()
        .current_dir(temp.path())
        .env("SITE_URL", "https://blog.example.org/")
        .arg("build")
        .assert()
        .success();

    let sitemap = fs::read_to_string(temp.path().join("out/sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://blog.example.org/</loc>"));
    assert!(sitemap.contains("<loc>https://blog.example.org/blogs/go-basics</loc>"));
    assert!(sitemap.contains("<loc>https://blog.example.org/snippets/debounce</loc>"));

    let robots = fs::read_to_string(temp.path().join("out/robots.txt")).unwrap();
    assert!(robots.contains("Sitemap: https://blog.example.org/sitemap.xml"));
}

#[test]
fn test_build_custom_output_dir() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    folio_cmd()
        .current_dir(temp.path())
        .args(["build", "--out", "public"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 posts, 0 snippets)"));

    let html = fs::read_to_string(temp.path().join("public/blogs/index.html")).unwrap();
    assert!(html.contains("No posts found. Try another keyword."));
}
