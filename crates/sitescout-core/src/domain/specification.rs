//! Specification pattern for composable content filters
//!
//! Listing filters (category, tag, free text) are expressed as
//! specifications so they can be combined and applied in one pass.

use std::sync::Arc;

/// Core specification trait
pub trait Specification<T>: Send + Sync {
    /// Check if the entity satisfies this specification
    fn is_satisfied_by(&self, entity: &T) -> bool;
}

/// Conjunction over a dynamic list; an empty list accepts everything
pub struct AllOf<T> {
    specs: Vec<Arc<dyn Specification<T>>>,
}

impl<T> AllOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a specification to the conjunction
    pub fn push<S: Specification<T> + 'static>(&mut self, spec: S) {
        self.specs.push(Arc::new(spec));
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Keep the items that satisfy every specification, preserving order
    pub fn filter<'a>(&self, items: impl IntoIterator<Item = &'a T>) -> Vec<T>
    where
        T: Clone + Send + Sync + 'a,
    {
        items
            .into_iter()
            .filter(|item| self.is_satisfied_by(item))
            .cloned()
            .collect()
    }
}

impl<T> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> Specification<T> for AllOf<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied_by(entity))
    }
}
