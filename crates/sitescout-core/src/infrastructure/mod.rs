//! Infrastructure layer
//!
//! Concrete backends for the domain's repository traits.

pub mod blog;
