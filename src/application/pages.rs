//! HTML page rendering for the static site

use crate::domain::markdown::{render_html, slugify};
use crate::domain::{About, Post, Snippet};
use crate::infrastructure::Config;
use std::fmt::Write;

pub const NO_POSTS_MESSAGE: &str = "No posts found. Try another keyword.";

/// URL of the pre-rendered listing for `tag`, or None when the tag has no
/// usable path segment
pub fn tag_url(tag: &str) -> Option<String> {
    let slug = slugify(tag);
    if slug.is_empty() {
        None
    } else {
        Some(format!("/blogs/tags/{}", slug))
    }
}

pub fn html_escape(input: &str) -> String {
    let mut escaped = String::new();
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap page content in the site layout
pub fn layout(config: &Config, page_title: &str, description: &str, body: &str) -> String {
    let full_title = if page_title.is_empty() {
        config.title.clone()
    } else {
        format!("{} - {}", page_title, config.title)
    };
    let description = if description.is_empty() {
        config.description.as_str()
    } else {
        description
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", html_escape(&full_title));
    if !description.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            html_escape(description)
        );
    }
    html.push_str("<link rel=\"stylesheet\" href=\"/styles.css\">\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header><nav>");
    let _ = write!(html, "<a href=\"/\">{}</a>", html_escape(&config.title));
    html.push_str("<a href=\"/blogs\">Blogs</a>");
    html.push_str("<a href=\"/snippets\">Snippets</a>");
    let _ = write!(html, "<a href=\"{}\">About</a>", About::URL);
    html.push_str("</nav></header>\n");

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("\n</main>\n");

    let _ = writeln!(
        html,
        "<footer><p>&copy; {}</p></footer>",
        html_escape(&config.author)
    );
    html.push_str("</body>\n</html>\n");
    html
}

fn post_card(post: &Post) -> String {
    let mut html = String::new();
    html.push_str("<article class=\"card\">");
    let _ = write!(
        html,
        "<h3><a href=\"{}\">{}</a></h3>",
        html_escape(&post.url),
        html_escape(&post.title)
    );
    let _ = write!(
        html,
        "<p class=\"meta\"><time datetime=\"{}\">{}</time> &mdash; {}</p>",
        post.published.format("%Y-%m-%d"),
        html_escape(&post.published_at),
        html_escape(&post.time_to_read)
    );
    if !post.description.is_empty() {
        let _ = write!(html, "<p>{}</p>", html_escape(&post.description));
    }
    html.push_str("</article>");
    html
}

fn snippet_card(snippet: &Snippet) -> String {
    let mut html = String::new();
    html.push_str("<article class=\"card\">");
    let _ = write!(
        html,
        "<h3><a href=\"{}\">{}</a></h3><p>{}</p>",
        html_escape(&snippet.url),
        html_escape(&snippet.title),
        html_escape(&snippet.description)
    );
    html.push_str("</article>");
    html
}

/// Homepage with the most recent posts
pub fn home_page(config: &Config, recent: &[Post]) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<section class=\"intro\"><h1>{}</h1>",
        html_escape(&config.author)
    );
    if !config.description.is_empty() {
        let _ = write!(body, "<p>{}</p>", html_escape(&config.description));
    }
    body.push_str("<a class=\"cta\" href=\"/blogs\">Read the Blogs</a></section>");

    body.push_str("<section class=\"recent\"><h2>Recent Posts</h2><div class=\"grid\">");
    for post in recent {
        body.push_str(&post_card(post));
    }
    body.push_str("</div><a class=\"cta\" href=\"/blogs\">Browse All Posts</a></section>");

    body.push_str("<section><h2>Want a quick look to code snippets?</h2>");
    body.push_str("<a class=\"cta\" href=\"/snippets\">Take me to Snippets</a></section>");

    layout(config, "", "", &body)
}

/// Blog listing with tag chips. `active` is the tag this listing is
/// filtered by; its chip links back to the full listing.
pub fn blog_list_page(config: &Config, posts: &[Post], tags: &[String], active: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Blogs</h1>");
    if let Some(tag) = active {
        let _ = write!(body, "<p class=\"filter\">Posts tagged {}</p>", html_escape(tag));
    }

    if !tags.is_empty() {
        body.push_str("<div class=\"tags\"><p>Filter posts by topics</p>");
        for tag in tags {
            let is_active = active == Some(tag.as_str());
            let href = if is_active {
                Some("/blogs".to_string())
            } else {
                tag_url(tag)
            };
            match href {
                Some(href) => {
                    let _ = write!(
                        body,
                        "<a class=\"tag{}\" href=\"{}\">{}</a>",
                        if is_active { " active" } else { "" },
                        html_escape(&href),
                        html_escape(tag)
                    );
                }
                None => {
                    let _ = write!(body, "<span class=\"tag\">{}</span>", html_escape(tag));
                }
            }
        }
        body.push_str("</div>");
    }

    if posts.is_empty() {
        let _ = write!(body, "<p class=\"empty\">{}</p>", NO_POSTS_MESSAGE);
    } else {
        body.push_str("<div class=\"grid\">");
        for post in posts {
            body.push_str(&post_card(post));
        }
        body.push_str("</div>");
    }

    let title = match active {
        Some(tag) => format!("Blogs tagged {}", tag),
        None => "Blogs".to_string(),
    };
    layout(config, &title, "", &body)
}

/// Single article page
pub fn post_page(config: &Config, post: &Post) -> String {
    let mut body = String::new();
    body.push_str("<a class=\"back\" href=\"/blogs\">back to blogs list</a>");
    body.push_str("<article>");
    let _ = write!(body, "<h1>{}</h1>", html_escape(&post.title));
    let _ = write!(
        body,
        "<div class=\"meta\"><time datetime=\"{}\">{}</time> &mdash; <span>{}</span></div>",
        post.published.format("%Y-%m-%d"),
        html_escape(&post.published_at),
        html_escape(&post.time_to_read)
    );
    if !post.tags.is_empty() {
        body.push_str("<ul class=\"tags\">");
        for tag in &post.tags {
            match tag_url(tag) {
                Some(href) => {
                    let _ = write!(
                        body,
                        "<li><a href=\"{}\">{}</a></li>",
                        html_escape(&href),
                        html_escape(tag)
                    );
                }
                None => {
                    let _ = write!(body, "<li>{}</li>", html_escape(tag));
                }
            }
        }
        body.push_str("</ul>");
    }
    body.push_str(&render_html(&post.body));
    body.push_str("</article>");

    layout(config, &post.title, &post.description, &body)
}

/// Snippet listing page
pub fn snippet_list_page(config: &Config, snippets: &[Snippet]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Snippets</h1>");
    body.push_str(
        "<p>A collection of code snippets that I have used or found essential in my coding journey.</p>",
    );
    body.push_str("<div class=\"grid\">");
    for snippet in snippets {
        body.push_str(&snippet_card(snippet));
    }
    body.push_str("</div>");

    layout(config, "Snippets", "", &body)
}

/// Single snippet page
pub fn snippet_page(config: &Config, snippet: &Snippet) -> String {
    let mut body = String::new();
    body.push_str("<a class=\"back\" href=\"/snippets\">back to snippets list</a>");
    body.push_str("<article>");
    let _ = write!(
        body,
        "<h1>{}</h1><p class=\"description\">{}</p>",
        html_escape(&snippet.title),
        html_escape(&snippet.description)
    );
    body.push_str(&render_html(&snippet.body));
    body.push_str("</article>");

    layout(config, &snippet.title, &snippet.description, &body)
}

/// About page from `content/about.mdx`
pub fn about_page(config: &Config, about: &About) -> String {
    let mut body = String::new();
    body.push_str("<article>");
    let _ = write!(body, "<h1>{}</h1>", html_escape(&about.title));
    body.push_str("<div class=\"about\">");
    body.push_str(&render_html(&about.body));
    body.push_str("</div></article>");

    layout(config, "About", &about.description, &body)
}

/// sitemap.xml for the given absolute URLs
pub fn sitemap_xml(urls: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in urls {
        let _ = writeln!(xml, "<url><loc>{}</loc></url>", html_escape(url));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "# *\nUser-agent: *\nAllow: /\n\n# Sitemaps\nSitemap: {}/sitemap.xml\n",
        base_url
    )
}
