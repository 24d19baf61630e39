//! Markdown to HTML rendering for article bodies

use pulldown_cmark::{html, CowStr, Event, Options, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn slug_strip_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s_-]").unwrap())
}

/// Turn heading text into an anchor id (`Hooks & State!` -> `hooks--state`).
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    slug_strip_regex()
        .replace_all(&lowered, "")
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Hands out unique anchor ids within one document
#[derive(Debug, Default)]
struct AnchorIds {
    seen: HashMap<String, usize>,
}

impl AnchorIds {
    fn next(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        id
    }
}

/// Render markdown to HTML.
///
/// Headings get an `id` derived from their text and their content is wrapped
/// in a link to that anchor, unless the heading already contains a link.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events: Vec<Event> = MdParser::new_ext(markdown, options).collect();
    let mut anchors = AnchorIds::default();
    let mut output: Vec<Event> = Vec::with_capacity(events.len());

    let mut i = 0;
    while i < events.len() {
        if let Event::Start(Tag::Heading { level, .. }) = &events[i] {
            let level = *level as usize;
            let end = events[i..]
                .iter()
                .position(|e| matches!(e, Event::End(TagEnd::Heading(_))))
                .map(|offset| i + offset)
                .unwrap_or(events.len());

            let mut text = String::new();
            for event in &events[i + 1..end] {
                if let Event::Text(t) | Event::Code(t) = event {
                    text.push_str(t);
                }
            }
            let id = anchors.next(&text);
            let has_link = events[i + 1..end]
                .iter()
                .any(|e| matches!(e, Event::Start(Tag::Link { .. })));

            let (open, close) = if has_link {
                (format!("<h{level} id=\"{id}\">"), format!("</h{level}>\n"))
            } else {
                (
                    format!("<h{level} id=\"{id}\"><a href=\"#{id}\">"),
                    format!("</a></h{level}>\n"),
                )
            };
            output.push(Event::Html(CowStr::from(open)));
            output.extend(events[i + 1..end].iter().cloned());
            output.push(Event::Html(CowStr::from(close)));

            i = end + 1;
            continue;
        }

        output.push(events[i].clone());
        i += 1;
    }

    let mut html_out = String::new();
    html::push_html(&mut html_out, output.into_iter());
    html_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("Hooks & State!"), "hooks--state");
        assert_eq!(slugify("  use_effect cleanup "), "use_effect-cleanup");
        assert_eq!(slugify("Café 2024"), "café-2024");
    }

    #[test]
    fn test_headings_get_anchor_links() {
        let html = render_html("## Getting Started\n\nText");
        assert!(html.contains(
            "<h2 id=\"getting-started\"><a href=\"#getting-started\">Getting Started</a></h2>"
        ));
        assert!(html.contains("<p>Text</p>"));
    }

    #[test]
    fn test_duplicate_headings_get_unique_ids() {
        let html = render_html("# Setup\n\n## Setup\n\n### Setup\n");
        assert!(html.contains("id=\"setup\""));
        assert!(html.contains("id=\"setup-1\""));
        assert!(html.contains("id=\"setup-2\""));
    }

    #[test]
    fn test_inline_code_in_heading() {
        let html = render_html("## The `useState` hook");
        assert!(html.contains("id=\"the-usestate-hook\""));
        assert!(html.contains("<code>useState</code>"));
    }

    #[test]
    fn test_heading_with_link_is_not_wrapped() {
        let html = render_html("## See [the docs](https://go.dev)\n");
        assert!(html.contains("<h2 id=\"see-the-docs\">See <a href=\"https://go.dev\">the docs</a></h2>"));
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_code_blocks_and_tables() {
        let md = "```rust\nfn main() {}\n```\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
        let html = render_html(md);
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_body_text_is_escaped() {
        let html = render_html("a < b & c");
        assert!(html.contains("a &lt; b &amp; c"));
    }
}
