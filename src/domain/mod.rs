//! Domain layer - Content model and listing logic

pub mod filter;
pub mod frontmatter;
pub mod markdown;
pub mod post;
pub mod reading_time;

pub use filter::{filter_posts, unique_tags, FilterQuery, Listable};
pub use post::{About, Post, Snippet};
pub use reading_time::ReadingTime;
