//! CLI layer - Command-line interface

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::{Cli, Commands, FilterArgs};
pub use logging::init_logging;
pub use output::{format_post_list, format_snippet_list, format_tag_list};
