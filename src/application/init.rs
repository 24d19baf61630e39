//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new site at the specified path.
pub fn init(path: &Path, title: &str, author: &str) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    let config = Config::new(title, author);
    repo.initialize(&config)?;

    println!("Initialized folio site at {}", path.display());
    println!("Add posts under {}/posts", config.content_dir);
    println!("Edit {}/about.mdx for the about page", config.content_dir);

    Ok(())
}
