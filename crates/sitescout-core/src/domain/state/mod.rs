//! URL state binding
//!
//! Maps page state to deterministic query parameters and back.

pub mod codec;
pub mod entity;

pub use codec::{build_query_string, parse_query_string};
pub use entity::{ALL_CATEGORIES, SearchState};
