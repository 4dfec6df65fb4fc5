//! Autocomplete suggestions
//!
//! A short, capped list drawn from four families in a fixed order. Blog and
//! knowledge content only appears on the full results page.

use std::sync::Arc;

use tracing::warn;

use crate::config::SearchConfig;
use crate::domain::content::{ContentSource, Family, normalize};

use super::entity::Suggestion;
use super::matcher::Matcher;

/// Families consulted for suggestions, in emission order
pub const SUGGESTION_FAMILIES: [Family; 4] = [
    Family::Service,
    Family::Portfolio,
    Family::Industry,
    Family::CaseStudy,
];

/// Builds capped suggestion lists from content sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEngine {
    per_family: usize,
    max_total: usize,
    description_chars: usize,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl SuggestionEngine {
    pub fn new(per_family: usize, max_total: usize) -> Self {
        Self {
            per_family,
            max_total,
            description_chars: 80,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.suggestions_per_family, config.max_suggestions)
            .with_description_chars(config.suggestion_description_chars)
    }

    pub fn with_description_chars(mut self, chars: usize) -> Self {
        self.description_chars = chars;
        self
    }

    /// Suggestions for the current input
    ///
    /// Empty for a blank query. A failing source contributes nothing and
    /// does not affect the other families.
    pub fn suggest(&self, query: &str, sources: &[Arc<dyn ContentSource>]) -> Vec<Suggestion> {
        let Some(matcher) = Matcher::new(query) else {
            return Vec::new();
        };

        let mut suggestions = Vec::new();

        for family in SUGGESTION_FAMILIES {
            let mut taken = 0;

            for source in sources.iter().filter(|s| s.family() == family) {
                if taken >= self.per_family {
                    break;
                }

                let records = match source.records() {
                    Ok(records) => records,
                    Err(e) => {
                        warn!(family = %family, error = %e, "Skipping suggestion source");
                        continue;
                    }
                };

                for record in records
                    .iter()
                    .filter(|r| r.family() == family && matcher.matches(r))
                {
                    if taken >= self.per_family {
                        break;
                    }
                    let result = normalize(record);
                    suggestions.push(Suggestion {
                        title: result.title,
                        description: truncate_description(
                            &result.description,
                            self.description_chars,
                        ),
                        url: result.url,
                        kind: family.label().to_string(),
                        icon: family.icon().to_string(),
                        family,
                    });
                    taken += 1;
                }
            }
        }

        suggestions.truncate(self.max_total);
        suggestions
    }
}

/// Cut a description to `max_chars` characters, marking the cut with "..."
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim_end())
}
