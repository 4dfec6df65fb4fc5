//! Query matching
//!
//! Case-insensitive substring containment, OR'd over a family-specific set
//! of fields. Emission order is the relevance order; nothing is scored.

use crate::domain::content::ContentRecord;

/// A prepared query, lowercased once and reused across records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    needle: String,
}

impl Matcher {
    /// Prepare a query; blank queries produce no matcher
    pub fn new(query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            None
        } else {
            Some(Self { needle })
        }
    }

    /// The normalized query text
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether any searchable field of the record contains the query
    pub fn matches(&self, record: &ContentRecord) -> bool {
        searchable_fields(record)
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// One-shot match; a blank query never matches
pub fn matches(query: &str, record: &ContentRecord) -> bool {
    Matcher::new(query).is_some_and(|m| m.matches(record))
}

/// Fields each family exposes to search
fn searchable_fields(record: &ContentRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = Vec::new();

    match record {
        ContentRecord::Service(s) => {
            fields.extend([s.title.as_str(), s.description.as_str()]);
            fields.extend(s.full_description.as_deref());
            fields.extend(s.category.as_deref());
        }
        ContentRecord::Portfolio(p) => {
            fields.extend([p.title.as_str(), p.description.as_str()]);
            fields.extend(p.category.as_deref());
            fields.extend(p.client.as_deref());
            fields.extend(p.industry.as_deref());
            fields.extend(p.tags.iter().map(String::as_str));
        }
        ContentRecord::Industry(i) => {
            fields.extend([i.title.as_str(), i.description.as_str()]);
        }
        ContentRecord::CaseStudy(c) => {
            fields.push(c.title.as_str());
            fields.extend(c.slug.as_deref());
            fields.extend(c.client.as_deref());
            fields.extend(c.industry.as_deref());
            fields.extend(c.summary.as_deref());
            fields.extend(c.challenge.as_deref());
            fields.extend(c.solution.as_deref());
            fields.extend(c.services.iter().map(String::as_str));
        }
        ContentRecord::Knowledge(k) => {
            fields.extend([k.title.as_str(), k.description.as_str()]);
            fields.extend(k.category.as_deref());
        }
        ContentRecord::Blog(b) => {
            fields.extend([b.title.as_str(), b.excerpt.as_str()]);
            fields.extend(b.category.as_deref());
            fields.extend(b.author.as_deref());
        }
    }

    fields
}
