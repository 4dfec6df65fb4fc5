//! Blog repository implementations

pub mod client;
pub mod memory;

pub use client::{BlogApiClient, BlogApiClientBuilder};
pub use memory::InMemoryBlogRepository;
