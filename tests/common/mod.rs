#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_ROOT");
    cmd.env_remove("SITE_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn init_site(root: &Path) {
    folio_cmd()
        .arg("init")
        .arg(root)
        .arg("--title")
        .arg("Dev Blog")
        .arg("--author")
        .arg("Jeff")
        .assert()
        .success();
}

pub fn write_post(root: &Path, slug: &str, title: &str, tags: &[&str], date: &str) {
    let source = format!(
        "---\n\
        title: \"{}\"\n\
        author: Jeff\n\
        bannerUrl: /banners/{}.png\n\
        description: About {}\n\
        tags: [{}]\n\
        publishedAt: '{}'\n\
        ---\n\
        ## Overview\n\n\
        Some words about {}.\n",
        title,
        slug,
        title,
        tags.join(", "),
        date,
        title
    );
    fs::write(root.join("content/posts").join(format!("{}.mdx", slug)), source).unwrap();
}

pub fn write_snippet(root: &Path, slug: &str, title: &str, tags: &[&str]) {
    let source = format!(
        "---\n\
        title: \"{}\"\n\
        description: Snippet for {}\n\
        author: Jeff\n\
        tags: [{}]\n\
        ---\n\
        ```js\nconsole.log('{}');\n```\n",
        title,
        title,
        tags.join(", "),
        slug
    );
    fs::write(
        root.join("content/snippets").join(format!("{}.mdx", slug)),
        source,
    )
    .unwrap();
}

/// A site with three posts and two snippets
pub fn sample_site(root: &Path) {
    init_site(root);
    write_post(root, "react-hooks", "React Hooks", &["react"], "2023-03-01");
    write_post(root, "go-basics", "Go Basics", &["go"], "2023-01-10");
    write_post(
        root,
        "tailwind-react",
        "Styling React with Tailwind",
        &["react", "css"],
        "2023-02-14",
    );
    write_snippet(root, "debounce", "Debounce", &["javascript"]);
    write_snippet(root, "use-fetch", "useFetch hook", &["react"]);
}
