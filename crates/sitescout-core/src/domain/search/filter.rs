//! Tab filtering and sorting of aggregated results
//!
//! Both stages return new bundles; the aggregation they read from is left
//! intact so tab counts can still be taken from it.

use std::cmp::Ordering;

use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::content::{Family, NormalizedResult};

use super::entity::{SearchBundle, SortBy, Tab};

/// Keep only the active tab's family; `All` keeps everything
pub fn filter_by_tab(bundle: &SearchBundle, tab: Tab) -> SearchBundle {
    match tab.family() {
        None => bundle.clone(),
        Some(active) => {
            let mut filtered = SearchBundle {
                degraded: bundle.degraded.clone(),
                ..Default::default()
            };
            *filtered.family_mut(active) = bundle.family(active).to_vec();
            filtered
        }
    }
}

/// Sort every family array independently
pub fn sort_bundle(bundle: &SearchBundle, sort: SortBy) -> SearchBundle {
    let mut sorted = SearchBundle {
        degraded: bundle.degraded.clone(),
        ..Default::default()
    };
    for family in Family::all() {
        *sorted.family_mut(family) = sort_results(bundle.family(family), sort);
    }
    sorted
}

/// Filter then sort
pub fn apply(bundle: &SearchBundle, tab: Tab, sort: SortBy) -> SearchBundle {
    sort_bundle(&filter_by_tab(bundle, tab), sort)
}

/// Stable sort of one result array
///
/// Missing dates order as the earliest possible date, so they fall to the
/// end of `Recent` and the start of `Oldest`.
pub fn sort_results(results: &[NormalizedResult], sort: SortBy) -> Vec<NormalizedResult> {
    let mut sorted = results.to_vec();
    match sort {
        SortBy::Relevance => {}
        SortBy::TitleAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortBy::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        SortBy::Recent => sorted.sort_by(|a, b| date_key(b).cmp(&date_key(a))),
        SortBy::Oldest => sorted.sort_by(|a, b| date_key(a).cmp(&date_key(b))),
    }
    sorted
}

/// Locale-insensitive title ordering with a deterministic tiebreak
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Fold case and strip diacritics so "Étude" sorts beside "etude"
pub fn collation_key(title: &str) -> String {
    title
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Undated results take the Unix epoch
fn date_key(result: &NormalizedResult) -> NaiveDate {
    result.sort_date.unwrap_or_default()
}
