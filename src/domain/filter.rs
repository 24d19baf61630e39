//! Listing filter: title search and tag intersection
//!
//! Filtering is a pure function of the input list and the query state. The
//! relative order of the input is always preserved; sorting is the caller's
//! job.
//!
//! # Examples
//!
//! ```
//! use folio::domain::filter::{filter_posts, Listable};
//!
//! struct Item(&'static str, Vec<String>);
//!
//! impl Listable for Item {
//!     fn title(&self) -> &str {
//!         self.0
//!     }
//!     fn tags(&self) -> &[String] {
//!         &self.1
//!     }
//! }
//!
//! let items = vec![
//!     Item("React Hooks", vec!["react".to_string()]),
//!     Item("Go Basics", vec!["go".to_string()]),
//! ];
//! let found = filter_posts(items, "go", &[]);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].title(), "Go Basics");
//! ```

use std::collections::BTreeSet;

/// Anything that can appear in a filterable listing
pub trait Listable {
    /// Title matched by the search term
    fn title(&self) -> &str;

    /// Tags matched against the active tag filters
    fn tags(&self) -> &[String];
}

/// Collect every tag used by the given items, without duplicates.
pub fn unique_tags<'a, T, I>(items: I) -> BTreeSet<String>
where
    T: Listable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .flat_map(|item| item.tags().iter().cloned())
        .collect()
}

/// Keep the items matching both the search term and the active tags.
///
/// An empty `search` matches every title; otherwise the title must contain
/// it case-insensitively. An empty `active_tags` matches every item;
/// otherwise the item needs at least one tag in common with it.
pub fn filter_posts<T: Listable>(items: Vec<T>, search: &str, active_tags: &[String]) -> Vec<T> {
    let needle = search.to_lowercase();

    items
        .into_iter()
        .filter(|item| needle.is_empty() || item.title().to_lowercase().contains(&needle))
        .filter(|item| {
            active_tags.is_empty() || item.tags().iter().any(|tag| active_tags.contains(tag))
        })
        .collect()
}

/// Search and tag state for a listing page, as carried in a URL query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub search: String,
    pub tags: Vec<String>,
}

impl FilterQuery {
    pub fn new(search: impl Into<String>, tags: Vec<String>) -> Self {
        let mut query = FilterQuery {
            search: search.into(),
            tags: Vec::new(),
        };
        for tag in tags {
            query.add_tag(tag);
        }
        query
    }

    /// Parse `search` and repeatable `tag` parameters from a query string.
    ///
    /// Unknown keys are ignored. Values that fail to decode are dropped, so a
    /// malformed query degrades to no filter instead of an error.
    ///
    /// ```
    /// use folio::domain::filter::FilterQuery;
    ///
    /// let query = FilterQuery::from_query_string("?tag=react&tag=go&search=hooks%20api");
    /// assert_eq!(query.search, "hooks api");
    /// assert_eq!(query.tags, vec!["react".to_string(), "go".to_string()]);
    /// ```
    pub fn from_query_string(raw: &str) -> Self {
        let mut query = FilterQuery::default();
        let mut search_seen = false;

        for pair in raw.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(key) = decode_component(key) else {
                continue;
            };
            let Some(value) = decode_component(value) else {
                continue;
            };

            match key.as_str() {
                "search" if !search_seen => {
                    query.search = value;
                    search_seen = true;
                }
                "tag" if !value.is_empty() => query.add_tag(value),
                _ => {}
            }
        }

        query
    }

    /// Encode back into a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        for tag in &self.tags {
            params.push(format!("tag={}", urlencoding::encode(tag)));
        }
        params.join("&")
    }

    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.tags.is_empty()
    }

    /// A new search replaces the term and clears the active tags.
    pub fn with_search(&self, term: &str) -> Self {
        FilterQuery {
            search: term.to_string(),
            tags: Vec::new(),
        }
    }

    /// Add the tag if it is not active, remove it otherwise. The search term
    /// is kept.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.tags.iter().position(|t| t == tag) {
            next.tags.remove(pos);
        } else {
            next.tags.push(tag.to_string());
        }
        next
    }

    /// Run the filter over `items`.
    pub fn apply<T: Listable>(&self, items: Vec<T>) -> Vec<T> {
        filter_posts(items, &self.search, &self.tags)
    }

    fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}
