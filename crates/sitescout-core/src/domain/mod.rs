//! Domain layer
//!
//! Content families, search, the blog listing, and URL state. Everything
//! here is independent of how content is stored or fetched.

pub mod content;
pub mod listing;
pub mod search;
pub mod specification;
pub mod state;

pub use specification::{AllOf, Specification};
