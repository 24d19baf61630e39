//! List snippets use case

use crate::domain::{FilterQuery, Snippet};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};

/// Service for listing code snippets
pub struct ListSnippetsService {
    repository: FileSystemRepository,
}

impl ListSnippetsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListSnippetsService { repository }
    }

    /// Snippets in file name order, filtered by `query`
    pub fn execute(&self, query: &FilterQuery) -> Result<Vec<Snippet>> {
        let config = self.repository.load_config()?;
        let snippets = self.repository.load_snippets(&config)?;
        Ok(query.apply(snippets))
    }
}
