//! Blog adapter with fallbacks
//!
//! Wraps a `BlogRepository` so that backend failures never reach the page.
//! Each call reports whether it fell back, letting the caller show a
//! degraded notice without treating it as an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::content::BlogPost;
use crate::domain::state::ALL_CATEGORIES;
use crate::error::Result;

use super::repository_trait::{BlogFilter, BlogRepository, TagCount};

/// A value from the blog backend, or its fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fetched<T> {
    pub value: T,
    /// True when the backend failed and `value` is a fallback
    pub degraded: bool,
}

impl<T> Fetched<T> {
    pub fn fresh(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }
}

/// Fallback-aware access to blog content
#[derive(Clone)]
pub struct BlogAdapter {
    repository: Arc<dyn BlogRepository>,
    fallback_categories: Vec<String>,
}

impl BlogAdapter {
    pub fn new(repository: Arc<dyn BlogRepository>, fallback_categories: Vec<String>) -> Self {
        Self {
            repository,
            fallback_categories: with_all_first(fallback_categories),
        }
    }

    /// Posts for a filter, or an empty list when the backend fails
    pub async fn fetch_all(&self, filter: &BlogFilter) -> Fetched<Vec<BlogPost>> {
        self.fetch_posts(filter)
            .await
            .unwrap_or_else(|e| degrade("posts", e, Vec::new()))
    }

    /// Posts for a filter, propagating backend failures
    ///
    /// The listing uses this for its primary fetch so a failure can drive
    /// the error banner.
    pub async fn fetch_posts(&self, filter: &BlogFilter) -> Result<Fetched<Vec<BlogPost>>> {
        let posts = self.repository.list_posts(filter).await?;
        Ok(Fetched::fresh(posts))
    }

    /// Category names starting with "All", or the fallback list
    pub async fn fetch_categories(&self) -> Fetched<Vec<String>> {
        match self.repository.list_categories().await {
            Ok(categories) => Fetched::fresh(with_all_first(categories)),
            Err(e) => degrade("categories", e, self.fallback_categories.clone()),
        }
    }

    /// Tags with counts, or an empty list
    pub async fn fetch_tags(&self) -> Fetched<Vec<TagCount>> {
        self.repository
            .list_tags()
            .await
            .map(Fetched::fresh)
            .unwrap_or_else(|e| degrade("tags", e, Vec::new()))
    }

    /// Up to `limit` featured posts, or an empty list
    pub async fn fetch_featured(&self, limit: usize) -> Fetched<Vec<BlogPost>> {
        match self.repository.featured_posts(limit).await {
            Ok(mut posts) => {
                posts.truncate(limit);
                Fetched::fresh(posts)
            }
            Err(e) => degrade("featured posts", e, Vec::new()),
        }
    }
}

fn degrade<T>(what: &str, error: crate::error::Error, fallback: T) -> Fetched<T> {
    warn!(
        resource = what,
        code = error.code(),
        error = %error,
        "Blog backend unavailable, using fallback"
    );
    Fetched::fallback(fallback)
}

/// Put "All" first and drop blank or repeated names, keeping first occurrences
fn with_all_first(categories: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = vec![ALL_CATEGORIES.to_string()];
    for category in categories {
        let name = category.trim();
        if name.is_empty() || out.iter().any(|c| c.eq_ignore_ascii_case(name)) {
            continue;
        }
        out.push(name.to_string());
    }
    out
}
