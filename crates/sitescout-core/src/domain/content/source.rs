//! Content sources and the static catalog
//!
//! Every family reaches the search engine through `ContentSource`, so a
//! static array and a live service are interchangeable.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

use super::entity::{
    BlogPost, CaseStudy, ContentRecord, Family, Industry, KnowledgeArticle, PortfolioProject,
    Service,
};

const DEMO_CATALOG: &str = include_str!("../../../data/demo_catalog.json");

/// A read-only supplier of records for one family
pub trait ContentSource: Send + Sync {
    /// The family every record from this source belongs to
    fn family(&self) -> Family;

    /// Current records, in the order the source emits them
    fn records(&self) -> Result<Vec<ContentRecord>>;
}

/// An in-memory, already-validated collection
#[derive(Debug, Clone)]
pub struct StaticSource {
    family: Family,
    records: Vec<ContentRecord>,
}

impl StaticSource {
    /// Create a source from records of a single family
    ///
    /// Records of any other family are dropped.
    pub fn new(family: Family, records: Vec<ContentRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|r| r.family() == family)
            .collect();
        Self { family, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ContentSource for StaticSource {
    fn family(&self) -> Family {
        self.family
    }

    fn records(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.records.clone())
    }
}

/// All site content held in memory, one array per family
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentCatalog {
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioProject>,
    pub industries: Vec<Industry>,
    pub case_studies: Vec<CaseStudy>,
    pub knowledge: Vec<KnowledgeArticle>,
    pub blog: Vec<BlogPost>,
}

impl ContentCatalog {
    /// Parse a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            records = catalog.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    /// The catalog bundled with the crate
    pub fn demo() -> Result<Self> {
        Self::from_json_str(DEMO_CATALOG)
    }

    /// Total number of records across families
    pub fn len(&self) -> usize {
        self.services.len()
            + self.portfolio.len()
            + self.industries.len()
            + self.case_studies.len()
            + self.knowledge.len()
            + self.blog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records of one family, wrapped in the tagged union
    pub fn records(&self, family: Family) -> Vec<ContentRecord> {
        match family {
            Family::Service => wrap(&self.services, ContentRecord::Service),
            Family::Portfolio => wrap(&self.portfolio, ContentRecord::Portfolio),
            Family::Industry => wrap(&self.industries, ContentRecord::Industry),
            Family::CaseStudy => wrap(&self.case_studies, ContentRecord::CaseStudy),
            Family::Knowledge => wrap(&self.knowledge, ContentRecord::Knowledge),
            Family::Blog => wrap(&self.blog, ContentRecord::Blog),
        }
    }

    /// One static source per family, in family order
    pub fn sources(&self) -> Vec<Arc<dyn ContentSource>> {
        Family::all()
            .into_iter()
            .map(|family| {
                Arc::new(StaticSource::new(family, self.records(family))) as Arc<dyn ContentSource>
            })
            .collect()
    }
}

fn wrap<T: Clone>(items: &[T], variant: fn(T) -> ContentRecord) -> Vec<ContentRecord> {
    items.iter().cloned().map(variant).collect()
}
