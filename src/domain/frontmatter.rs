//! YAML frontmatter extraction

use crate::error::{FolioError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

const DELIMITER: &str = "---";

/// Frontmatter fields of a blog post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontMatter {
    pub title: String,
    pub author: String,
    pub banner_url: String,
    pub tags: Vec<String>,
    pub published_at: String,
    #[serde(default)]
    pub description: String,
}

/// Frontmatter fields of a code snippet
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetFrontMatter {
    pub title: String,
    pub description: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Frontmatter fields of the about page
#[derive(Debug, Clone, Deserialize)]
pub struct AboutFrontMatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Split a document into its frontmatter block and body.
///
/// The opening `---` must be the first line. Returns None when there is no
/// complete frontmatter block.
pub fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source
        .strip_prefix(DELIMITER)
        .and_then(|r| r.strip_prefix("\r\n").or_else(|| r.strip_prefix('\n')))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

/// Parse the frontmatter of `source` into `T`, returning it with the body.
///
/// `path` is only used to label errors.
pub fn parse_document<T: DeserializeOwned>(path: &Path, source: &str) -> Result<(T, String)> {
    let (yaml, body) = split_frontmatter(source)
        .ok_or_else(|| FolioError::content(path, "missing frontmatter block"))?;

    let fields = serde_yaml::from_str(yaml)
        .map_err(|e| FolioError::content(path, format!("bad frontmatter: {}", e)))?;

    Ok((fields, body.trim_start_matches(['\r', '\n']).to_string()))
}
