//! Site configuration (folio.toml)

use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "folio.toml";
pub const DEFAULT_SITE_URL: &str = "https://example.dev";

/// Keys accepted by `folio config`
pub const CONFIG_KEYS: &[&str] = &[
    "title",
    "author",
    "description",
    "site_url",
    "content_dir",
    "output_dir",
    "recent_posts",
    "created",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_recent_posts")]
    pub recent_posts: usize,
    pub created: DateTime<Utc>,
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_output_dir() -> String {
    "out".to_string()
}

fn default_recent_posts() -> usize {
    3
}

impl Config {
    /// Create a new config with default values
    pub fn new(title: &str, author: &str) -> Self {
        Config {
            title: title.to_string(),
            author: author.to_string(),
            description: String::new(),
            site_url: default_site_url(),
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
            recent_posts: default_recent_posts(),
            created: Utc::now(),
        }
    }

    /// Load config from folio.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::NotFolioDirectory(path.to_path_buf())
            } else {
                FolioError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config to folio.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Site URL without a trailing slash, `SITE_URL` taking precedence
    pub fn effective_site_url(&self) -> String {
        let url = std::env::var("SITE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.site_url.clone());
        url.trim_end_matches('/').to_string()
    }

    /// Read a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "title" => Ok(self.title.clone()),
            "author" => Ok(self.author.clone()),
            "description" => Ok(self.description.clone()),
            "site_url" => Ok(self.site_url.clone()),
            "content_dir" => Ok(self.content_dir.clone()),
            "output_dir" => Ok(self.output_dir.clone()),
            "recent_posts" => Ok(self.recent_posts.to_string()),
            "created" => Ok(self.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a single value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "title" => self.title = value.to_string(),
            "author" => self.author = value.to_string(),
            "description" => self.description = value.to_string(),
            "site_url" => self.site_url = value.to_string(),
            "content_dir" => self.content_dir = value.to_string(),
            "output_dir" => self.output_dir = value.to_string(),
            "recent_posts" => {
                self.recent_posts = value.parse().map_err(|_| {
                    FolioError::Config(format!(
                        "recent_posts must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(FolioError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> FolioError {
    FolioError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
