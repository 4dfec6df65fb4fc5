//! Search service for the site-wide search page and autocomplete
//!
//! Wires content sources through aggregation, filtering, and sorting, and
//! shapes the response for the render layer.

use std::sync::Arc;

use tracing::info;

use crate::config::SearchConfig;
use crate::domain::content::{ContentCatalog, ContentSource, Family};
use crate::domain::state::SearchState;

use super::aggregator::aggregate;
use super::entity::{
    FamilyPreview, SearchBundle, SearchOutcome, SearchResults, Suggestion, Tab, TabCount, ViewAll,
};
use super::filter;
use super::suggestion::SuggestionEngine;

/// Service for search and suggestions over a fixed set of sources
#[derive(Clone)]
pub struct SearchService {
    sources: Vec<Arc<dyn ContentSource>>,
    config: SearchConfig,
    suggestions: SuggestionEngine,
}

impl SearchService {
    /// Create a new search service
    pub fn new(sources: Vec<Arc<dyn ContentSource>>, config: SearchConfig) -> Self {
        let suggestions = SuggestionEngine::from_config(&config);
        Self {
            sources,
            config,
            suggestions,
        }
    }

    /// Create a service over every family of a catalog
    pub fn from_catalog(catalog: &ContentCatalog, config: SearchConfig) -> Self {
        Self::new(catalog.sources(), config)
    }

    pub fn sources(&self) -> &[Arc<dyn ContentSource>] {
        &self.sources
    }

    /// Autocomplete entries for the header search box
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.suggestions.suggest(query, &self.sources)
    }

    /// Full results for a search page state
    ///
    /// A blank query skips aggregation and returns the browse view.
    pub fn search(&self, state: &SearchState) -> SearchOutcome {
        if !state.has_query() {
            return SearchOutcome::Browse {
                popular_categories: self.config.popular_categories.clone(),
            };
        }

        let aggregated = aggregate(&state.query, &self.sources);
        let tab_counts = tab_counts(&aggregated);
        let grand_total = aggregated.total_results();
        let results = filter::apply(&aggregated, state.active_category, state.sort_by);

        let previews = if state.active_category == Tab::All {
            self.previews(&results, state)
        } else {
            Vec::new()
        };

        let empty_message = if results.is_empty() {
            Some(empty_message(&state.query, state.active_category, grand_total))
        } else {
            None
        };

        info!(
            query = %state.query,
            tab = %state.active_category,
            sort = %state.sort_by,
            total = grand_total,
            "Search completed"
        );

        SearchOutcome::Results(SearchResults {
            query: state.query.clone(),
            active_tab: state.active_category,
            sort_by: state.sort_by,
            results,
            tab_counts,
            grand_total,
            previews,
            empty_message,
        })
    }

    fn previews(&self, results: &SearchBundle, state: &SearchState) -> Vec<FamilyPreview> {
        let limit = self.config.preview_per_family;

        Family::all()
            .into_iter()
            .filter(|family| !results.family(*family).is_empty())
            .map(|family| {
                let all = results.family(family);
                let tab = Tab::from_family(family);
                let view_all = (all.len() > limit).then(|| ViewAll {
                    label: format!("View all ({})", all.len()),
                    tab,
                    href: format!("/search{}", state.with_tab(tab).to_search_query_string()),
                });
                FamilyPreview {
                    family,
                    tab,
                    items: all.iter().take(limit).cloned().collect(),
                    total: all.len(),
                    view_all,
                }
            })
            .collect()
    }
}

/// One count per tab, taken from the unfiltered aggregation
pub fn tab_counts(aggregated: &SearchBundle) -> Vec<TabCount> {
    Tab::all()
        .into_iter()
        .map(|tab| TabCount::new(tab, aggregated.count(tab)))
        .collect()
}

fn empty_message(query: &str, tab: Tab, grand_total: usize) -> String {
    if grand_total == 0 || tab == Tab::All {
        format!("No results found for \"{query}\"")
    } else {
        format!("No {} results for \"{query}\"", tab.label())
    }
}
