//! Full-results aggregation across all six families

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::content::{ContentSource, normalize};

use super::entity::SearchBundle;
use super::matcher::Matcher;

/// Run the matcher over every source and partition normalized results by
/// family. No caps are applied.
///
/// A source that fails leaves its family empty and is recorded in
/// `SearchBundle::degraded`.
pub fn aggregate(query: &str, sources: &[Arc<dyn ContentSource>]) -> SearchBundle {
    let mut bundle = SearchBundle::default();
    let Some(matcher) = Matcher::new(query) else {
        return bundle;
    };

    for source in sources {
        let family = source.family();
        match source.records() {
            Ok(records) => {
                let matched = records
                    .iter()
                    .filter(|r| r.family() == family && matcher.matches(r))
                    .map(normalize);
                bundle.family_mut(family).extend(matched);
            }
            Err(e) => {
                warn!(family = %family, error = %e, "Content source unavailable");
                if !bundle.degraded.contains(&family) {
                    bundle.degraded.push(family);
                }
            }
        }
    }

    debug!(
        query = matcher.needle(),
        total = bundle.total_results(),
        "Aggregated search results"
    );

    bundle
}
