//! Specifications for blog listing filters
//!
//! Category, tag, and free-text filters are applied to fetched posts as one
//! conjunction, so a repository that ignores a filter parameter still yields
//! a correctly filtered listing.

use crate::domain::content::{BlogPost, ContentRecord};
use crate::domain::search::matches as matches_record;
use crate::domain::specification::{AllOf, Specification};
use crate::domain::state::{ALL_CATEGORIES, SearchState};

/// Posts in a category (case-insensitive)
pub struct CategorySpec {
    category: String,
}

impl CategorySpec {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Specification<BlogPost> for CategorySpec {
    fn is_satisfied_by(&self, post: &BlogPost) -> bool {
        if self.category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return true;
        }
        post.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(&self.category))
    }
}

/// Posts carrying a tag (case-insensitive)
pub struct TagSpec {
    tag: String,
}

impl TagSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Specification<BlogPost> for TagSpec {
    fn is_satisfied_by(&self, post: &BlogPost) -> bool {
        post.tags.iter().any(|t| t.eq_ignore_ascii_case(&self.tag))
    }
}

/// Posts the search matcher accepts for a query
pub struct TextQuerySpec {
    query: String,
}

impl TextQuerySpec {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Specification<BlogPost> for TextQuerySpec {
    fn is_satisfied_by(&self, post: &BlogPost) -> bool {
        matches_record(&self.query, &ContentRecord::Blog(post.clone()))
    }
}

/// Builder for the listing filter conjunction
#[derive(Default)]
pub struct ListingSpecBuilder {
    specs: AllOf<BlogPost>,
}

impl ListingSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters named by a listing state
    pub fn from_state(state: &SearchState) -> Self {
        let mut builder = Self::new();
        if let Some(category) = &state.category {
            builder = builder.with_category(category);
        }
        if let Some(tag) = &state.tag {
            builder = builder.with_tag(tag);
        }
        if state.has_query() {
            builder = builder.with_query(&state.query);
        }
        builder
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.specs.push(CategorySpec::new(category));
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.specs.push(TagSpec::new(tag));
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.specs.push(TextQuerySpec::new(query));
        self
    }

    pub fn is_satisfied_by(&self, post: &BlogPost) -> bool {
        self.specs.is_satisfied_by(post)
    }

    /// Keep matching posts in their original order
    pub fn filter(&self, posts: &[BlogPost]) -> Vec<BlogPost> {
        self.specs.filter(posts)
    }
}
