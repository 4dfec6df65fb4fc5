//! Search entity and related types
//!
//! Defines tabs, sort orders, suggestions, and the categorized result bundle
//! handed to the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::content::{Family, NormalizedResult};

/// A result tab on the search page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    All,
    Services,
    Portfolio,
    Industries,
    CaseStudies,
    Knowledge,
    Blog,
}

impl Tab {
    /// Convert to the URL key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Industries => "industries",
            Self::CaseStudies => "case-studies",
            Self::Knowledge => "knowledge",
            Self::Blog => "blog",
        }
    }

    /// Create from a URL key or family name
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        if key == "all" {
            return Some(Self::All);
        }
        Family::from_str(&key).map(Self::from_family)
    }

    /// Tab that displays a family
    pub fn from_family(family: Family) -> Self {
        match family {
            Family::Service => Self::Services,
            Family::Portfolio => Self::Portfolio,
            Family::Industry => Self::Industries,
            Family::CaseStudy => Self::CaseStudies,
            Family::Knowledge => Self::Knowledge,
            Family::Blog => Self::Blog,
        }
    }

    /// Family shown by this tab, `None` for the combined view
    pub fn family(&self) -> Option<Family> {
        match self {
            Self::All => None,
            Self::Services => Some(Family::Service),
            Self::Portfolio => Some(Family::Portfolio),
            Self::Industries => Some(Family::Industry),
            Self::CaseStudies => Some(Family::CaseStudy),
            Self::Knowledge => Some(Family::Knowledge),
            Self::Blog => Some(Family::Blog),
        }
    }

    /// Tab label without a count
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Results",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Industries => "Industries",
            Self::CaseStudies => "Case Studies",
            Self::Knowledge => "Knowledge Base",
            Self::Blog => "Blog Posts",
        }
    }

    /// All tabs in display order
    pub fn all() -> [Self; 7] {
        [
            Self::All,
            Self::Services,
            Self::Portfolio,
            Self::Industries,
            Self::CaseStudies,
            Self::Knowledge,
            Self::Blog,
        ]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering applied to each result array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    /// Matcher emission order
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "a-z")]
    TitleAsc,
    #[serde(rename = "z-a")]
    TitleDesc,
    #[serde(rename = "recent")]
    Recent,
    #[serde(rename = "oldest")]
    Oldest,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::TitleAsc => "a-z",
            Self::TitleDesc => "z-a",
            Self::Recent => "recent",
            Self::Oldest => "oldest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Some(Self::Relevance),
            "a-z" | "az" => Some(Self::TitleAsc),
            "z-a" | "za" => Some(Self::TitleDesc),
            "recent" | "newest" => Some(Self::Recent),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lightweight autocomplete entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
    pub family: Family,
}

/// Matched results partitioned by family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchBundle {
    pub services: Vec<NormalizedResult>,
    pub portfolio: Vec<NormalizedResult>,
    pub industries: Vec<NormalizedResult>,
    pub case_studies: Vec<NormalizedResult>,
    pub knowledge: Vec<NormalizedResult>,
    pub blog: Vec<NormalizedResult>,
    /// Families whose source failed during aggregation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<Family>,
}

impl SearchBundle {
    pub fn family(&self, family: Family) -> &[NormalizedResult] {
        match family {
            Family::Service => &self.services,
            Family::Portfolio => &self.portfolio,
            Family::Industry => &self.industries,
            Family::CaseStudy => &self.case_studies,
            Family::Knowledge => &self.knowledge,
            Family::Blog => &self.blog,
        }
    }

    pub fn family_mut(&mut self, family: Family) -> &mut Vec<NormalizedResult> {
        match family {
            Family::Service => &mut self.services,
            Family::Portfolio => &mut self.portfolio,
            Family::Industry => &mut self.industries,
            Family::CaseStudy => &mut self.case_studies,
            Family::Knowledge => &mut self.knowledge,
            Family::Blog => &mut self.blog,
        }
    }

    /// Sum of all six array lengths
    pub fn total_results(&self) -> usize {
        Family::all().iter().map(|f| self.family(*f).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_results() == 0
    }

    /// Result count for a tab; `All` is the grand total
    pub fn count(&self, tab: Tab) -> usize {
        match tab.family() {
            Some(family) => self.family(family).len(),
            None => self.total_results(),
        }
    }
}

/// A tab label with its count from the unfiltered aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabCount {
    pub tab: Tab,
    pub label: String,
    pub count: usize,
}

impl TabCount {
    pub fn new(tab: Tab, count: usize) -> Self {
        Self {
            tab,
            label: format!("{} ({})", tab.label(), count),
            count,
        }
    }
}

/// Link that switches the page to a single-family tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewAll {
    pub label: String,
    pub tab: Tab,
    pub href: String,
}

/// First few results of one family in the combined view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyPreview {
    pub family: Family,
    pub tab: Tab,
    pub items: Vec<NormalizedResult>,
    pub total: usize,
    pub view_all: Option<ViewAll>,
}

/// Full search response for a non-empty query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub active_tab: Tab,
    pub sort_by: SortBy,
    /// Filtered and sorted arrays for the active tab
    pub results: SearchBundle,
    /// Counts from the unfiltered aggregation
    pub tab_counts: Vec<TabCount>,
    pub grand_total: usize,
    /// Per-family previews, populated for the `All` tab only
    pub previews: Vec<FamilyPreview>,
    pub empty_message: Option<String>,
}

impl SearchResults {
    /// Number of results in the displayed view
    pub fn total_results(&self) -> usize {
        self.results.total_results()
    }

    pub fn tab_count(&self, tab: Tab) -> Option<&TabCount> {
        self.tab_counts.iter().find(|c| c.tab == tab)
    }
}

/// What the search page should render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No query yet: show popular categories instead of "no results"
    Browse { popular_categories: Vec<String> },
    Results(SearchResults),
}
