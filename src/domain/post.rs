//! Post and snippet content records

use super::filter::Listable;
use super::frontmatter::{parse_document, AboutFrontMatter, PostFrontMatter, SnippetFrontMatter};
use super::reading_time::ReadingTime;
use crate::error::{FolioError, Result};
use chrono::{DateTime, NaiveDate};
use std::path::Path;

/// A blog article loaded from `content/posts`
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Path relative to the content directory (e.g. `posts/react-hooks.mdx`)
    pub id: String,
    pub slug: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub banner_url: String,
    pub tags: Vec<String>,
    pub published: NaiveDate,
    /// Publication date as written in the frontmatter
    pub published_at: String,
    pub time_to_read: String,
    pub body: String,
}

impl Post {
    /// Parse a post from its source text. `id` is the path relative to the
    /// content directory.
    pub fn parse(id: &str, source: &str) -> Result<Self> {
        let path = Path::new(id);
        let slug = slug_from_path(path)?;
        let (fm, body): (PostFrontMatter, String) = parse_document(path, source)?;

        let published = parse_published_at(&fm.published_at).ok_or_else(|| {
            FolioError::content(
                path,
                format!("unrecognized publishedAt date: '{}'", fm.published_at),
            )
        })?;

        Ok(Post {
            id: id.to_string(),
            url: format!("/blogs/{}", slug),
            slug,
            title: fm.title,
            description: fm.description,
            author: fm.author,
            banner_url: fm.banner_url,
            tags: fm.tags,
            published,
            published_at: fm.published_at,
            time_to_read: ReadingTime::estimate(&body).to_string(),
            body,
        })
    }
}

impl Listable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A code snippet loaded from `content/snippets`
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub id: String,
    pub slug: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub tags: Vec<String>,
    pub body: String,
}

impl Snippet {
    pub fn parse(id: &str, source: &str) -> Result<Self> {
        let path = Path::new(id);
        let slug = slug_from_path(path)?;
        let (fm, body): (SnippetFrontMatter, String) = parse_document(path, source)?;

        Ok(Snippet {
            id: id.to_string(),
            url: format!("/snippets/{}", slug),
            slug,
            title: fm.title,
            description: fm.description,
            author: fm.author,
            tags: fm.tags,
            body,
        })
    }
}

impl Listable for Snippet {
    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// The single about document, `content/about.mdx`
#[derive(Debug, Clone, PartialEq)]
pub struct About {
    pub id: String,
    pub title: String,
    pub description: String,
    pub body: String,
}

impl About {
    pub const URL: &'static str = "/about";

    pub fn parse(id: &str, source: &str) -> Result<Self> {
        let (fm, body): (AboutFrontMatter, String) = parse_document(Path::new(id), source)?;

        Ok(About {
            id: id.to_string(),
            title: fm.title,
            description: fm.description,
            body,
        })
    }
}

fn slug_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FolioError::content(path, "file name is not a valid slug"))
}

/// Parse a `publishedAt` value.
///
/// Accepts `2023-01-15`, RFC 3339 timestamps and `January 15, 2023`.
pub fn parse_published_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%B %d, %Y", "%b %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
