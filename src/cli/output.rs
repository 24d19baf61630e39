//! Output formatting utilities

use crate::application::pages::NO_POSTS_MESSAGE;
use crate::domain::{Post, Snippet};

/// Format a list of posts for display
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("{}\n", NO_POSTS_MESSAGE);
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{}  {}  {}",
            post.published.format("%Y-%m-%d"),
            post.slug,
            post.title
        ));
        if !post.tags.is_empty() {
            output.push_str(&format!("  [{}]", post.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Format a list of snippets for display
pub fn format_snippet_list(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return "No snippets found\n".to_string();
    }

    let mut output = String::new();
    for snippet in snippets {
        output.push_str(&format!("{}  {}", snippet.slug, snippet.title));
        if !snippet.tags.is_empty() {
            output.push_str(&format!("  [{}]", snippet.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}

/// Format a single post with its metadata header
pub fn format_post(post: &Post) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", post.title));
    output.push_str(&format!(
        "{} | {} | {}\n",
        post.published_at, post.time_to_read, post.author
    ));
    if !post.tags.is_empty() {
        output.push_str(&format!("tags: {}\n", post.tags.join(", ")));
    }
    output.push_str(&format!("url: {}\n\n", post.url));
    output.push_str(&post.body);
    output
}

/// Format a single snippet with its metadata header
pub fn format_snippet(snippet: &Snippet) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n", snippet.title, snippet.description));
    if !snippet.tags.is_empty() {
        output.push_str(&format!("tags: {}\n", snippet.tags.join(", ")));
    }
    output.push_str(&format!("url: {}\n\n", snippet.url));
    output.push_str(&snippet.body);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(slug: &str, tags: &[&str]) -> Post {
        Post {
            id: format!("posts/{}.mdx", slug),
            slug: slug.to_string(),
            url: format!("/blogs/{}", slug),
            title: "React Hooks".to_string(),
            description: String::new(),
            author: "Jeff".to_string(),
            banner_url: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: NaiveDate::from_ymd_opt(2023, 1, 17).unwrap(),
            published_at: "2023-01-17".to_string(),
            time_to_read: "2 min read".to_string(),
            body: "Body text\n".to_string(),
        }
    }

    #[test]
    fn test_format_empty_post_list() {
        assert_eq!(format_post_list(&[]), "No posts found. Try another keyword.\n");
    }

    #[test]
    fn test_format_post_list() {
        let output = format_post_list(&[post("hooks", &["react", "hooks"]), post("plain", &[])]);
        assert!(output.contains("2023-01-17  hooks  React Hooks  [react, hooks]\n"));
        assert!(output.contains("2023-01-17  plain  React Hooks\n"));
    }

    #[test]
    fn test_format_empty_snippet_list() {
        assert_eq!(format_snippet_list(&[]), "No snippets found\n");
    }

    #[test]
    fn test_format_empty_tag_list() {
        let tags = vec![];
        assert_eq!(format_tag_list(&tags), "No tags found\n");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["go".to_string(), "react".to_string()];
        assert_eq!(format_tag_list(&tags), "#go\n#react\n");
    }

    #[test]
    fn test_format_post() {
        let output = format_post(&post("hooks", &["react"]));
        assert!(output.starts_with("React Hooks\n2023-01-17 | 2 min read | Jeff\n"));
        assert!(output.contains("url: /blogs/hooks\n"));
        assert!(output.ends_with("Body text\n"));
    }
}
