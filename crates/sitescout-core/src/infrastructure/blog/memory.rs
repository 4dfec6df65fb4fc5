//! In-memory blog repository backed by catalog posts

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::content::{BlogPost, parse_date};
use crate::domain::listing::{BlogFilter, BlogRepository, ListingSpecBuilder, TagCount};
use crate::error::Result;

/// Blog repository over a fixed set of posts
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Replace the stored posts
    pub async fn replace(&self, posts: Vec<BlogPost>) {
        *self.posts.write().await = posts;
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>> {
        let mut spec = ListingSpecBuilder::new();
        if let Some(category) = &filter.category {
            spec = spec.with_category(category);
        }
        if let Some(tag) = &filter.tag {
            spec = spec.with_tag(tag);
        }
        if let Some(query) = &filter.query {
            spec = spec.with_query(query);
        }
        Ok(spec.filter(&self.posts.read().await))
    }

    /// Categories in first-seen order
    async fn list_categories(&self) -> Result<Vec<String>> {
        let posts = self.posts.read().await;
        let mut categories: Vec<String> = Vec::new();
        for category in posts.iter().filter_map(|p| p.category.as_deref()) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        Ok(categories)
    }

    /// Tags by descending count, then name
    async fn list_tags(&self) -> Result<Vec<TagCount>> {
        let posts = self.posts.read().await;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in posts.iter().flat_map(|p| p.tags.iter()) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }

        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(name, count)| TagCount::new(name, count))
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        Ok(tags)
    }

    /// Posts flagged featured, or the most recent posts when none are
    async fn featured_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
        let posts = self.posts.read().await;
        let flagged: Vec<BlogPost> = posts.iter().filter(|p| p.featured).cloned().collect();

        let mut featured = if flagged.is_empty() {
            let mut recent = posts.clone();
            recent.sort_by_key(|p| {
                std::cmp::Reverse(
                    p.publish_date
                        .as_deref()
                        .and_then(parse_date)
                        .unwrap_or_default(),
                )
            });
            recent
        } else {
            flagged
        };
        featured.truncate(limit);
        Ok(featured)
    }
}
