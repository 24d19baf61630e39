//! Application layer - Use cases and orchestration

pub mod build;
pub mod init;
pub mod list_posts;
pub mod list_snippets;
pub mod list_tags;
pub mod manage_config;
pub mod pages;
pub mod show;

pub use build::{BuildReport, BuildService};
pub use list_posts::{sorted_posts, ListPostsService, PostListing};
pub use list_snippets::ListSnippetsService;
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use show::ShowService;
