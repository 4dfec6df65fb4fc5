//! Content families, raw records, and the normalized result shape
//!
//! Each family has its own record type because the site's collections are
//! structurally different. `ContentRecord` closes them into one tagged union.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The content family a record or result originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Service,
    Portfolio,
    Industry,
    CaseStudy,
    Knowledge,
    Blog,
}

impl Family {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Portfolio => "portfolio",
            Self::Industry => "industry",
            Self::CaseStudy => "case_study",
            Self::Knowledge => "knowledge",
            Self::Blog => "blog",
        }
    }

    /// Create from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "service" | "services" => Some(Self::Service),
            "portfolio" => Some(Self::Portfolio),
            "industry" | "industries" => Some(Self::Industry),
            "case_study" | "case_studies" => Some(Self::CaseStudy),
            "knowledge" => Some(Self::Knowledge),
            "blog" => Some(Self::Blog),
            _ => None,
        }
    }

    /// Get all families in display order
    pub fn all() -> [Self; 6] {
        [
            Self::Service,
            Self::Portfolio,
            Self::Industry,
            Self::CaseStudy,
            Self::Knowledge,
            Self::Blog,
        ]
    }

    /// Human-readable type label shown on suggestions and cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Portfolio => "Portfolio",
            Self::Industry => "Industry",
            Self::CaseStudy => "Case Study",
            Self::Knowledge => "Knowledge Base",
            Self::Blog => "Blog Post",
        }
    }

    /// Icon identifier for the presentation layer
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Service => "briefcase",
            Self::Portfolio => "layout",
            Self::Industry => "building",
            Self::CaseStudy => "file-text",
            Self::Knowledge => "book-open",
            Self::Blog => "pen-tool",
        }
    }

    /// Path prefix for detail pages
    pub fn url_prefix(&self) -> &'static str {
        match self {
            Self::Service => "/services",
            Self::Portfolio => "/portfolio",
            Self::Industry => "/industries",
            Self::CaseStudy => "/case-studies",
            Self::Knowledge => "/knowledge",
            Self::Blog => "/blog",
        }
    }

    /// Category used when a record carries none
    pub fn fallback_category(&self) -> &'static str {
        match self {
            Self::Service => "Uncategorized",
            Self::Portfolio => "Project",
            Self::Industry => "Industry",
            Self::CaseStudy => "Case Study",
            Self::Knowledge => "Knowledge Base",
            Self::Blog => "Uncategorized",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A service offering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// A portfolio project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioProject {
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub date: Option<String>,
}

/// An industry the agency serves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Industry {
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

/// A client case study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseStudy {
    pub slug: Option<String>,
    pub title: String,
    pub client: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub services: Vec<String>,
    pub image: Option<String>,
    pub date: Option<String>,
}

/// A knowledge-base article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KnowledgeArticle {
    pub slug: Option<String>,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub last_updated: Option<String>,
}

/// A blog post, local or fetched from the blog API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub author: Option<String>,
    pub publish_date: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub featured: bool,
}

/// Closed union over every family's raw record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", content = "record", rename_all = "snake_case")]
pub enum ContentRecord {
    Service(Service),
    Portfolio(PortfolioProject),
    Industry(Industry),
    CaseStudy(CaseStudy),
    Knowledge(KnowledgeArticle),
    Blog(BlogPost),
}

impl ContentRecord {
    /// The family this record belongs to
    pub fn family(&self) -> Family {
        match self {
            Self::Service(_) => Family::Service,
            Self::Portfolio(_) => Family::Portfolio,
            Self::Industry(_) => Family::Industry,
            Self::CaseStudy(_) => Family::CaseStudy,
            Self::Knowledge(_) => Family::Knowledge,
            Self::Blog(_) => Family::Blog,
        }
    }
}

/// Common shape every adapter produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub meta: Option<String>,
    pub sort_date: Option<NaiveDate>,
    pub family: Family,
    pub image: Option<String>,
}
