//! Blog listing page types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::content::BlogPost;
use crate::domain::state::SearchState;

use super::pagination::{PageInfo, PageLink};
use super::repository_trait::TagCount;

/// Lifecycle of a listing load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl LoadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which secondary fetches fell back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradedSources {
    pub categories: bool,
    pub tags: bool,
    pub featured: bool,
}

impl DegradedSources {
    pub fn any(&self) -> bool {
        self.categories || self.tags || self.featured
    }
}

/// Error banner for a failed primary fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingError {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

/// Everything the blog listing renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    /// State the page was built for, with the page number clamped
    pub state: SearchState,
    pub posts: Vec<BlogPost>,
    pub page_info: PageInfo,
    pub links: Vec<PageLink>,
    pub categories: Vec<String>,
    pub tags: Vec<TagCount>,
    pub featured: Vec<BlogPost>,
    pub degraded: DegradedSources,
    pub error: Option<ListingError>,
    pub empty_state: Option<String>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Result of a load once it completes
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The newest load; its page is now current
    Applied(ListingPage),
    /// A newer load started first; this result was discarded
    Superseded { token: u64 },
}

impl LoadOutcome {
    pub fn page(&self) -> Option<&ListingPage> {
        match self {
            Self::Applied(page) => Some(page),
            Self::Superseded { .. } => None,
        }
    }
}

/// Message naming whatever narrowed the listing to nothing
///
/// `No posts found for "seo" in Marketing tagged "local"`
pub fn empty_state_message(state: &SearchState) -> String {
    let mut message = String::from("No posts found");
    if state.has_query() {
        message.push_str(&format!(" for \"{}\"", state.query));
    }
    if let Some(category) = &state.category {
        message.push_str(&format!(" in {category}"));
    }
    if let Some(tag) = &state.tag {
        message.push_str(&format!(" tagged \"{tag}\""));
    }
    message
}
