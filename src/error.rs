//! Error types for folio

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Not a folio site: {0}")]
    NotFolioDirectory(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Invalid content in {path}: {message}")]
    Content { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FolioError {
    /// Build a content error for the given file
    pub fn content(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        FolioError::Content {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::NotFolioDirectory(_) => 2,
            FolioError::Content { .. } => 3,
            FolioError::PostNotFound(_) | FolioError::SnippetNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::NotFolioDirectory(path) => {
                format!(
                    "Not a folio site: {}\n\n\
                    Suggestions:\n\
                    • Run 'folio init' in this directory to create a new site\n\
                    • Navigate to a directory containing folio.toml\n\
                    • Set FOLIO_ROOT environment variable to your site path",
                    path.display()
                )
            }
            FolioError::PostNotFound(slug) => {
                format!(
                    "No post with slug '{}'\n\n\
                    Suggestions:\n\
                    • Use 'folio posts' to see available slugs\n\
                    • Slugs are file names without the .mdx extension\n\
                    • Pass --snippet to look up a snippet instead",
                    slug
                )
            }
            FolioError::SnippetNotFound(slug) => {
                format!(
                    "No snippet with slug '{}'\n\n\
                    Suggestions:\n\
                    • Use 'folio snippets' to see available slugs\n\
                    • Slugs are file names without the .mdx extension",
                    slug
                )
            }
            FolioError::Content { path, message } => {
                format!(
                    "Invalid content in {}: {}\n\n\
                    Posts need a frontmatter block with: title, author, bannerUrl, tags, publishedAt\n\
                    Snippets need: title, description, author, tags\n\
                    The about page needs: title\n\
                    Example:\n\
                    ---\n\
                    title: Understanding React Hooks\n\
                    tags: [react, hooks]\n\
                    publishedAt: 2023-01-15\n\
                    ---",
                    path.display(),
                    message
                )
            }
            FolioError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: folio config title 'My Dev Blog'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
