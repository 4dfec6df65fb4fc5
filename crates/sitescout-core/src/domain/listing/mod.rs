//! Blog listing domain module
//!
//! # Architecture
//!
//! - **Repository**: `BlogRepository` trait over the blog backend
//! - **Adapter**: `BlogAdapter` turning backend failures into fallbacks
//! - **Specifications**: category, tag, and text filters
//! - **Pagination**: `Paginator` slices and page-index lists
//! - **Service**: `ListingController` with request tokens and retry
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sitescout_core::domain::listing::{BlogAdapter, ListingController};
//! use sitescout_core::domain::state::SearchState;
//!
//! let adapter = BlogAdapter::new(Arc::new(repo), config.blog.fallback_categories.clone());
//! let controller = ListingController::new(adapter, &config.listing);
//! let outcome = controller.load(&SearchState::from_query_string("?page=2&tag=seo")).await;
//! ```

pub mod adapter;
pub mod entity;
pub mod pagination;
pub mod repository_trait;
pub mod service;
pub mod specification;

pub use adapter::{BlogAdapter, Fetched};
pub use entity::{
    DegradedSources, ListingError, ListingPage, LoadOutcome, LoadPhase, empty_state_message,
};
pub use pagination::{MAX_VISIBLE_PAGES_LIMIT, PageInfo, PageItem, PageLink, Paginator, page_links};
pub use repository_trait::{BlogFilter, BlogRepository, TagCount};
pub use service::ListingController;
pub use specification::{CategorySpec, ListingSpecBuilder, TagSpec, TextQuerySpec};
