//! Look up a single post or snippet by slug

use crate::domain::{Post, Snippet};
use crate::error::{FolioError, Result};
use crate::infrastructure::{FileSystemRepository, SiteRepository};

pub struct ShowService {
    repository: FileSystemRepository,
}

impl ShowService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ShowService { repository }
    }

    pub fn post(&self, slug: &str) -> Result<Post> {
        let config = self.repository.load_config()?;
        self.repository
            .load_posts(&config)?
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| FolioError::PostNotFound(slug.to_string()))
    }

    pub fn snippet(&self, slug: &str) -> Result<Snippet> {
        let config = self.repository.load_config()?;
        self.repository
            .load_snippets(&config)?
            .into_iter()
            .find(|s| s.slug == slug)
            .ok_or_else(|| FolioError::SnippetNotFound(slug.to_string()))
    }
}
