//! Static site generation use case

use super::list_posts::{sorted_posts, ListPostsService};
use super::pages;
use crate::domain::{About, FilterQuery};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Summary of a finished build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    /// Files written, relative to the output directory
    pub files: Vec<String>,
    pub posts: usize,
    pub snippets: usize,
}

/// Service for rendering the whole site to static files
pub struct BuildService {
    repository: FileSystemRepository,
}

impl BuildService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BuildService { repository }
    }

    /// Render every page. `out` overrides the configured output directory.
    pub fn execute(&self, out: Option<PathBuf>) -> Result<BuildReport> {
        let config = self.repository.load_config()?;
        let output_dir = match out {
            Some(dir) => self.repository.root().join(dir),
            None => self.repository.output_dir(&config),
        };

        let posts = sorted_posts(self.repository.load_posts(&config)?, None);
        let snippets = self.repository.load_snippets(&config)?;
        let about = self.repository.load_about(&config)?;
        let base_url = config.effective_site_url();

        let mut files = Vec::new();
        let mut urls = vec![format!("{}/", base_url)];
        let mut write = |rel: String, contents: String| -> Result<()> {
            self.repository.write_output(&output_dir, &rel, &contents)?;
            debug!(file = %rel, "wrote page");
            files.push(rel);
            Ok(())
        };

        let recent: Vec<_> = posts.iter().take(config.recent_posts).cloned().collect();
        write("index.html".to_string(), pages::home_page(&config, &recent))?;

        let query = FilterQuery::default();
        let listing = ListPostsService::listing(posts.clone(), &query, None);
        write(
            "blogs/index.html".to_string(),
            pages::blog_list_page(&config, &listing.posts, &listing.tags, None),
        )?;
        urls.push(format!("{}/blogs", base_url));

        let mut tag_urls = HashSet::new();
        for tag in &listing.tags {
            let Some(url) = pages::tag_url(tag) else {
                warn!(%tag, "tag has no usable path, skipping its page");
                continue;
            };
            if !tag_urls.insert(url.clone()) {
                warn!(%tag, %url, "tag page already written for another tag");
                continue;
            }

            let query = FilterQuery::new("", vec![tag.clone()]);
            let tagged = ListPostsService::listing(posts.clone(), &query, None);
            write(
                format!("{}/index.html", url.trim_start_matches('/')),
                pages::blog_list_page(&config, &tagged.posts, &tagged.tags, Some(tag)),
            )?;
            urls.push(format!("{}{}", base_url, url));
        }

        for post in &posts {
            write(
                format!("blogs/{}/index.html", post.slug),
                pages::post_page(&config, post),
            )?;
            urls.push(format!("{}{}", base_url, post.url));
        }

        write(
            "snippets/index.html".to_string(),
            pages::snippet_list_page(&config, &snippets),
        )?;
        urls.push(format!("{}/snippets", base_url));

        for snippet in &snippets {
            write(
                format!("snippets/{}/index.html", snippet.slug),
                pages::snippet_page(&config, snippet),
            )?;
            urls.push(format!("{}{}", base_url, snippet.url));
        }

        if let Some(about) = &about {
            write(
                format!("{}/index.html", About::URL.trim_start_matches('/')),
                pages::about_page(&config, about),
            )?;
            urls.push(format!("{}{}", base_url, About::URL));
        }

        write("sitemap.xml".to_string(), pages::sitemap_xml(&urls))?;
        write("robots.txt".to_string(), pages::robots_txt(&base_url))?;

        info!(
            posts = posts.len(),
            snippets = snippets.len(),
            files = files.len(),
            output = %output_dir.display(),
            "site built"
        );

        Ok(BuildReport {
            output_dir,
            files,
            posts: posts.len(),
            snippets: snippets.len(),
        })
    }
}
