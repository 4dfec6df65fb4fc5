//! Page state derived from the URL
//!
//! `SearchState` is rebuilt from the query string on every navigation and
//! never mutated in place. Changes produce a new state, whose query string
//! becomes the next URL.

use serde::{Deserialize, Serialize};

use crate::domain::search::{SortBy, Tab};

use super::codec::{build_query_string, first_value, parse_query_string};

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Search and listing state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub active_category: Tab,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub page: u32,
    pub sort_by: SortBy,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_category: Tab::All,
            tag: None,
            category: None,
            page: 1,
            sort_by: SortBy::Relevance,
        }
    }
}

impl SearchState {
    /// State for a query with every other parameter at its default
    pub fn new(query: impl Into<String>) -> Self {
        Self::default().with_query(query)
    }

    /// Parse a query string, falling back to defaults for anything missing
    /// or malformed
    pub fn from_query_string(query_string: &str) -> Self {
        let pairs = parse_query_string(query_string);

        let query = first_value(&pairs, "q")
            .map(|q| q.trim().to_string())
            .unwrap_or_default();
        let active_category = first_value(&pairs, "tab")
            .and_then(Tab::from_str)
            .unwrap_or_default();
        let sort_by = first_value(&pairs, "sort")
            .and_then(SortBy::from_str)
            .unwrap_or_default();
        let page = first_value(&pairs, "page").map(parse_page).unwrap_or(1);

        Self {
            query,
            active_category,
            tag: first_value(&pairs, "tag").and_then(non_blank),
            category: first_value(&pairs, "category").and_then(normalize_category),
            page,
            sort_by,
        }
    }

    /// Blog listing URL: `?page=N&category=C&tag=T&q=Q`, defaults omitted
    pub fn to_listing_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if !self.query.is_empty() {
            pairs.push(("q", self.query.clone()));
        }
        build_query_string(&pairs)
    }

    /// Search page URL: `?q=Q&tab=T&sort=S`, defaults omitted
    pub fn to_search_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.query.is_empty() {
            pairs.push(("q", self.query.clone()));
        }
        if self.active_category != Tab::All {
            pairs.push(("tab", self.active_category.as_str().to_string()));
        }
        if self.sort_by != SortBy::Relevance {
            pairs.push(("sort", self.sort_by.as_str().to_string()));
        }
        build_query_string(&pairs)
    }

    /// Category label shown in the listing UI
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Move to a page; zero becomes page 1
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Change the category filter and return to page 1
    pub fn with_category(&self, category: Option<&str>) -> Self {
        Self {
            category: category.and_then(normalize_category),
            page: 1,
            ..self.clone()
        }
    }

    /// Change the tag filter and return to page 1
    pub fn with_tag(&self, tag: Option<&str>) -> Self {
        Self {
            tag: tag.and_then(non_blank),
            page: 1,
            ..self.clone()
        }
    }

    /// Change the query and return to page 1
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    /// Switch the search tab
    pub fn with_tab(&self, tab: Tab) -> Self {
        Self {
            active_category: tab,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort_by: SortBy) -> Self {
        Self {
            sort_by,
            ..self.clone()
        }
    }
}

/// Positive integers only; anything else reads as page 1
fn parse_page(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => 1,
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalize_category(value: &str) -> Option<String> {
    non_blank(value).filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES))
}
