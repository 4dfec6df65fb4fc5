//! Repository trait for blog content
//!
//! Abstracts over the blog backend (HTTP API, in-memory catalog).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::content::BlogPost;
use crate::domain::state::SearchState;
use crate::error::Result;

/// A tag with the number of posts carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    #[serde(default)]
    pub count: usize,
}

impl TagCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Server-side filter for post listings; `None` means unfiltered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub query: Option<String>,
}

impl BlogFilter {
    pub fn from_state(state: &SearchState) -> Self {
        Self {
            category: state.category.clone(),
            tag: state.tag.clone(),
            query: state.has_query().then(|| state.query.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none() && self.query.is_none()
    }
}

/// Repository trait for blog posts and their taxonomy
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Posts matching a filter
    async fn list_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>>;

    /// Category names, in the backend's order
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// Tags with post counts
    async fn list_tags(&self) -> Result<Vec<TagCount>>;

    /// Up to `limit` featured posts
    async fn featured_posts(&self, limit: usize) -> Result<Vec<BlogPost>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct NullRepository;

    #[async_trait]
    impl BlogRepository for NullRepository {
        async fn list_posts(&self, _filter: &BlogFilter) -> Result<Vec<BlogPost>> {
            Ok(Vec::new())
        }

        async fn list_categories(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        async fn list_tags(&self) -> Result<Vec<TagCount>> {
            Ok(Vec::new())
        }

        async fn featured_posts(&self, _limit: usize) -> Result<Vec<BlogPost>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_trait_is_object_safe() {
        let repo: Arc<dyn BlogRepository> = Arc::new(NullRepository);
        assert!(repo.list_posts(&BlogFilter::default()).await.unwrap().is_empty());
    }

    #[test]
    fn test_filter_from_state() {
        let state = SearchState::default()
            .with_category(Some("SEO"))
            .with_query("  ");
        let filter = BlogFilter::from_state(&state);
        assert_eq!(filter.category.as_deref(), Some("SEO"));
        assert_eq!(filter.query, None);
        assert!(!filter.is_empty());
        assert!(BlogFilter::default().is_empty());
    }

    #[test]
    fn test_tag_count_defaults_missing_count() {
        let tag: TagCount = serde_json::from_str(r#"{"name": "seo"}"#).unwrap();
        assert_eq!(tag, TagCount::new("seo", 0));
    }
}
