//! List tags use case

use crate::domain::unique_tags;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};

/// Service for listing all tags used by posts.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Every post tag, sorted, without duplicates.
    pub fn execute(&self) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let posts = self.repository.load_posts(&config)?;
        Ok(unique_tags(&posts).into_iter().collect())
    }
}
