//! Sitescout Core Library
//!
//! Content search for a marketing site, including:
//! - Content adapters normalizing six content families
//! - Site-wide search with autocomplete suggestions
//! - Tab filtering and sorting of categorized results
//! - Blog listing with filters, pagination, and fallbacks
//! - URL state binding for shareable links

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{Error, Result};

#[cfg(test)]
mod error_tests;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::content::{ContentCatalog, ContentSource, Family, NormalizedResult};
    pub use crate::domain::listing::{BlogAdapter, BlogRepository, ListingController, ListingPage};
    pub use crate::domain::search::{SearchOutcome, SearchService, SortBy, Tab};
    pub use crate::domain::state::SearchState;
    pub use crate::error::{Error, Result};
}
