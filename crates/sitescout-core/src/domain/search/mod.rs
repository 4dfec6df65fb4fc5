//! Search domain module
//!
//! Site-wide search over every content family.
//!
//! # Architecture
//!
//! - **Matcher**: case-insensitive containment over per-family fields
//! - **Suggestions**: capped autocomplete from four families
//! - **Aggregator**: uncapped results partitioned by family
//! - **Filter**: tab filtering and non-mutating sorts
//! - **Service**: `SearchService` shaping the page response
//!
//! # Example
//!
//! ```ignore
//! use sitescout_core::domain::content::ContentCatalog;
//! use sitescout_core::domain::search::SearchService;
//! use sitescout_core::domain::state::SearchState;
//!
//! let service = SearchService::from_catalog(&ContentCatalog::demo()?, Default::default());
//! let outcome = service.search(&SearchState::from_query_string("?q=web+design"));
//! ```

pub mod aggregator;
pub mod entity;
pub mod filter;
pub mod matcher;
pub mod service;
pub mod suggestion;

pub use aggregator::aggregate;
pub use entity::{
    FamilyPreview, SearchBundle, SearchOutcome, SearchResults, SortBy, Suggestion, Tab, TabCount,
    ViewAll,
};
pub use matcher::{Matcher, matches};
pub use service::SearchService;
pub use suggestion::{SUGGESTION_FAMILIES, SuggestionEngine, truncate_description};
