//! folio - Content engine for a personal developer blog
//!
//! Loads MDX posts and code snippets, filters listings by title search and
//! tags, and renders the site to static HTML.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
