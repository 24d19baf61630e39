//! File system repository

use crate::domain::{About, Post, Snippet};
use crate::error::{FolioError, Result};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const POSTS_DIR: &str = "posts";
pub const SNIPPETS_DIR: &str = "snippets";
pub const ABOUT_FILE: &str = "about.mdx";

/// Extension of content files
const CONTENT_EXTENSION: &str = "mdx";

const ABOUT_TEMPLATE: &str = "---\n\
title: About Me\n\
description: A few words about the author\n\
---\n\
Write something about yourself here.\n";

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from folio.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to folio.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if folio.toml exists
    fn is_initialized(&self) -> bool;

    /// Create folio.toml, the content directories and a starter about page
    fn initialize(&self, config: &Config) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the site root. FOLIO_ROOT wins, then walking up from the
    /// current directory. The root is always absolute.
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir()?;

        if let Ok(root_path) = std::env::var("FOLIO_ROOT") {
            let path = current_dir.join(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "FOLIO_ROOT is set to '{}' but no {} found. \
                    Run 'folio init' in that directory or unset FOLIO_ROOT.",
                    path.display(),
                    CONFIG_FILE
                )));
            }
        }

        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FolioError::NotFolioDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn initialize(&self, config: &Config) -> Result<()> {
        if self.is_initialized() {
            return Err(FolioError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        let content = self.root.join(&config.content_dir);
        fs::create_dir_all(content.join(POSTS_DIR))?;
        fs::create_dir_all(content.join(SNIPPETS_DIR))?;
        let about = content.join(ABOUT_FILE);
        if !about.exists() {
            fs::write(about, ABOUT_TEMPLATE)?;
        }
        self.save_config(config)
    }
}

// Content operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    fn content_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.content_dir)
    }

    /// Output directory, absolute or relative to the site root
    pub fn output_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.output_dir)
    }

    /// Load `content/about.mdx`, if the site has one
    pub fn load_about(&self, config: &Config) -> Result<Option<About>> {
        let path = self.content_dir(config).join(ABOUT_FILE);
        if !path.is_file() {
            warn!(file = %path.display(), "about page missing");
            return Ok(None);
        }

        let source = fs::read_to_string(&path)?;
        let about = About::parse(ABOUT_FILE, &source)?;
        debug!(id = ABOUT_FILE, "loaded content file");
        Ok(Some(about))
    }

    /// Load every post in `content/posts`, in file name order
    pub fn load_posts(&self, config: &Config) -> Result<Vec<Post>> {
        self.load_collection(config, POSTS_DIR, Post::parse)
    }

    /// Load every snippet in `content/snippets`, in file name order
    pub fn load_snippets(&self, config: &Config) -> Result<Vec<Snippet>> {
        self.load_collection(config, SNIPPETS_DIR, Snippet::parse)
    }

    fn load_collection<T>(
        &self,
        config: &Config,
        collection: &str,
        parse: fn(&str, &str) -> Result<T>,
    ) -> Result<Vec<T>> {
        let dir = self.content_dir(config).join(collection);
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "content directory missing");
            return Ok(Vec::new());
        }

        let mut items = Vec::new();
        for (file_name, path) in Self::content_files(&dir) {
            let id = format!("{}/{}", collection, file_name);
            let source = fs::read_to_string(&path)?;
            items.push(parse(&id, &source)?);
            debug!(%id, "loaded content file");
        }

        Ok(items)
    }

    /// Content files directly inside `dir`, sorted by file name
    fn content_files(dir: &Path) -> Vec<(String, PathBuf)> {
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            let is_content = Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == CONTENT_EXTENSION);
            if !is_content {
                debug!(file = name, "skipping non-content file");
                continue;
            }
            files.push((name.to_string(), entry.path().to_path_buf()));
        }

        files
    }

    /// Write a generated file relative to `out_dir`, a directory already
    /// resolved against the site root (see `output_dir`)
    pub fn write_output(&self, out_dir: &Path, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = out_dir.join(rel);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, contents)?;
        Ok(path)
    }
}
