//! List posts use case

use crate::domain::{unique_tags, FilterQuery, Post};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use tracing::debug;

/// Sort posts newest first and keep at most `limit` of them.
///
/// Posts published on the same day are ordered by slug.
pub fn sorted_posts(mut posts: Vec<Post>, limit: Option<usize>) -> Vec<Post> {
    posts.sort_by(|a, b| {
        b.published
            .cmp(&a.published)
            .then_with(|| a.slug.cmp(&b.slug))
    });

    if let Some(n) = limit {
        posts.truncate(n);
    }
    posts
}

/// Result of a post listing query
#[derive(Debug, Clone)]
pub struct PostListing {
    /// Posts matching the query, newest first
    pub posts: Vec<Post>,
    /// Every tag used by any post, for the filter chips
    pub tags: Vec<String>,
    /// Number of posts before filtering
    pub total: usize,
}

/// Service for listing blog posts
pub struct ListPostsService {
    repository: FileSystemRepository,
}

impl ListPostsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListPostsService { repository }
    }

    /// Load, sort and filter posts. The limit applies after filtering.
    pub fn execute(&self, query: &FilterQuery, limit: Option<usize>) -> Result<PostListing> {
        let config = self.repository.load_config()?;
        let posts = sorted_posts(self.repository.load_posts(&config)?, None);
        Ok(Self::listing(posts, query, limit))
    }

    /// Build a listing from posts already sorted by the caller
    pub fn listing(posts: Vec<Post>, query: &FilterQuery, limit: Option<usize>) -> PostListing {
        let total = posts.len();
        let tags = unique_tags(&posts).into_iter().collect();

        let mut matched = query.apply(posts);
        if let Some(n) = limit {
            matched.truncate(n);
        }
        debug!(total, matched = matched.len(), query = %query.to_query_string(), "filtered posts");

        PostListing {
            posts: matched,
            tags,
            total,
        }
    }
}
