//! CLI command definitions

use crate::domain::FilterQuery;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Content engine for a personal developer blog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Search and tag filters shared by listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep entries whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Keep entries having at least one of these tags (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// URL query string, e.g. "search=hooks" or "tag=react&tag=go"
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,
}

impl FilterArgs {
    /// Resolve flags into query state. A `--query` string replaces the flags.
    pub fn to_query(&self) -> FilterQuery {
        match &self.query {
            Some(raw) => FilterQuery::from_query_string(raw),
            None => FilterQuery::new(self.search.clone(), self.tags.clone()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site title
        #[arg(long, default_value = "My Dev Blog")]
        title: String,

        /// Author name
        #[arg(long, default_value = "Anonymous")]
        author: String,
    },

    /// List posts, newest first
    Posts {
        #[command(flatten)]
        filter: FilterArgs,

        /// Show at most this many posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List code snippets
    Snippets {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List every tag used by posts
    Tags,

    /// Print a post (or snippet) by slug
    Show {
        slug: String,

        /// Look up a snippet instead of a post
        #[arg(long)]
        snippet: bool,
    },

    /// Render the static site
    Build {
        /// Output directory (default: output_dir from folio.toml)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_posts_filter_flags() {
        let cli = Cli::parse_from(["folio", "posts", "-s", "hooks", "-t", "react", "--tag", "go"]);
        match cli.command {
            Some(Commands::Posts { filter, limit }) => {
                let query = filter.to_query();
                assert_eq!(query.search, "hooks");
                assert_eq!(query.tags, vec!["react".to_string(), "go".to_string()]);
                assert_eq!(limit, None);
            }
            other => panic!("Expected posts command, got {:?}", other),
        }
    }

    #[test]
    fn test_query_string_replaces_flags() {
        let cli = Cli::parse_from(["folio", "posts", "-s", "ignored", "--query", "tag=rust"]);
        match cli.command {
            Some(Commands::Posts { filter, .. }) => {
                let query = filter.to_query();
                assert_eq!(query.search, "");
                assert_eq!(query.tags, vec!["rust".to_string()]);
            }
            other => panic!("Expected posts command, got {:?}", other),
        }
    }
}
