//! Content domain module
//!
//! Raw records for the six content families, the adapters that normalize
//! them, and the sources that feed them to search and listings.

pub mod adapter;
pub mod entity;
pub mod source;

pub use adapter::{display_date, normalize, parse_date, slugify};
pub use entity::{
    BlogPost, CaseStudy, ContentRecord, Family, Industry, KnowledgeArticle, NormalizedResult,
    PortfolioProject, Service,
};
pub use source::{ContentCatalog, ContentSource, StaticSource};
