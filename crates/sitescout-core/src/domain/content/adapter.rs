//! Content adapters
//!
//! One normalizer per family. Adapters never fail: missing optional fields
//! fall back to documented defaults so every record yields a usable result.

use chrono::{DateTime, NaiveDate};

use super::entity::{
    BlogPost, CaseStudy, ContentRecord, Family, Industry, KnowledgeArticle, NormalizedResult,
    PortfolioProject, Service,
};

/// Normalize any record into the common result shape
pub fn normalize(record: &ContentRecord) -> NormalizedResult {
    match record {
        ContentRecord::Service(service) => normalize_service(service),
        ContentRecord::Portfolio(project) => normalize_portfolio(project),
        ContentRecord::Industry(industry) => normalize_industry(industry),
        ContentRecord::CaseStudy(study) => normalize_case_study(study),
        ContentRecord::Knowledge(article) => normalize_knowledge(article),
        ContentRecord::Blog(post) => normalize_blog_post(post),
    }
}

pub fn normalize_service(service: &Service) -> NormalizedResult {
    let description = first_non_blank([
        Some(service.description.as_str()),
        service.full_description.as_deref(),
    ]);

    NormalizedResult {
        title: title_or_default(&service.title, Family::Service),
        description,
        url: detail_url(Family::Service, service.slug.as_deref(), &service.title),
        category: category_or_default(service.category.as_deref(), Family::Service),
        meta: None,
        sort_date: None,
        family: Family::Service,
        image: non_blank(service.image.as_deref()),
    }
}

pub fn normalize_portfolio(project: &PortfolioProject) -> NormalizedResult {
    NormalizedResult {
        title: title_or_default(&project.title, Family::Portfolio),
        description: project.description.trim().to_string(),
        url: detail_url(Family::Portfolio, project.slug.as_deref(), &project.title),
        category: category_or_default(project.category.as_deref(), Family::Portfolio),
        meta: join_meta([project.client.as_deref(), project.industry.as_deref()]),
        sort_date: project.date.as_deref().and_then(parse_date),
        family: Family::Portfolio,
        image: non_blank(project.image.as_deref()),
    }
}

pub fn normalize_industry(industry: &Industry) -> NormalizedResult {
    NormalizedResult {
        title: title_or_default(&industry.title, Family::Industry),
        description: industry.description.trim().to_string(),
        url: detail_url(Family::Industry, industry.slug.as_deref(), &industry.title),
        category: Family::Industry.fallback_category().to_string(),
        meta: None,
        sort_date: None,
        family: Family::Industry,
        image: non_blank(industry.image.as_deref()),
    }
}

pub fn normalize_case_study(study: &CaseStudy) -> NormalizedResult {
    let description = first_non_blank([
        study.summary.as_deref(),
        study.challenge.as_deref(),
        study.solution.as_deref(),
    ]);

    NormalizedResult {
        title: title_or_default(&study.title, Family::CaseStudy),
        description,
        url: detail_url(Family::CaseStudy, study.slug.as_deref(), &study.title),
        category: category_or_default(study.industry.as_deref(), Family::CaseStudy),
        meta: join_meta([study.client.as_deref(), study.industry.as_deref()]),
        sort_date: study.date.as_deref().and_then(parse_date),
        family: Family::CaseStudy,
        image: non_blank(study.image.as_deref()),
    }
}

pub fn normalize_knowledge(article: &KnowledgeArticle) -> NormalizedResult {
    let sort_date = article.last_updated.as_deref().and_then(parse_date);

    NormalizedResult {
        title: title_or_default(&article.title, Family::Knowledge),
        description: article.description.trim().to_string(),
        url: detail_url(Family::Knowledge, article.slug.as_deref(), &article.title),
        category: category_or_default(article.category.as_deref(), Family::Knowledge),
        meta: sort_date.map(|date| format!("Updated {}", display_date(date))),
        sort_date,
        family: Family::Knowledge,
        image: None,
    }
}

pub fn normalize_blog_post(post: &BlogPost) -> NormalizedResult {
    let sort_date = post.publish_date.as_deref().and_then(parse_date);

    NormalizedResult {
        title: title_or_default(&post.title, Family::Blog),
        description: post.excerpt.trim().to_string(),
        url: detail_url(Family::Blog, post.slug.as_deref(), &post.title),
        category: category_or_default(post.category.as_deref(), Family::Blog),
        meta: byline(post.author.as_deref(), sort_date),
        sort_date,
        family: Family::Blog,
        image: non_blank(post.image.as_deref()),
    }
}

/// Parse an ISO date (`2024-03-05`) or RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Format a date the way cards display it, e.g. "March 5, 2024"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// URL-safe slug derived from a title
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// "by {author} • {date}", dropping whichever part is missing
fn byline(author: Option<&str>, date: Option<NaiveDate>) -> Option<String> {
    let author = non_blank(author).map(|a| format!("by {}", a));
    join_meta([author.as_deref(), date.map(display_date).as_deref()])
}

fn join_meta<const N: usize>(parts: [Option<&str>; N]) -> Option<String> {
    let parts: Vec<&str> = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

fn detail_url(family: Family, slug: Option<&str>, title: &str) -> String {
    let slug = non_blank(slug)
        .map(|s| s.trim_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(title));

    if slug.is_empty() {
        format!("{}/untitled", family.url_prefix())
    } else {
        format!("{}/{}", family.url_prefix(), slug)
    }
}

fn title_or_default(title: &str, family: Family) -> String {
    let title = title.trim();
    if title.is_empty() {
        format!("Untitled {}", family.label())
    } else {
        title.to_string()
    }
}

fn category_or_default(category: Option<&str>, family: Family) -> String {
    non_blank(category).unwrap_or_else(|| family.fallback_category().to_string())
}

fn first_non_blank<const N: usize>(candidates: [Option<&str>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_byline() {
        let post = BlogPost {
            slug: Some("launch".into()),
            title: "Launch Day".into(),
            excerpt: "We shipped".into(),
            author: Some("Sam Rivera".into()),
            publish_date: Some("2024-03-05".into()),
            ..Default::default()
        };

        let result = normalize_blog_post(&post);
        assert_eq!(result.url, "/blog/launch");
        assert_eq!(result.meta.as_deref(), Some("by Sam Rivera • March 5, 2024"));
        assert_eq!(result.sort_date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(result.category, "Uncategorized");
    }

    #[test]
    fn test_blog_post_without_author_omits_byline() {
        let post = BlogPost {
            title: "Dateless".into(),
            ..Default::default()
        };
        let result = normalize_blog_post(&post);
        assert!(result.meta.is_none());
        assert!(result.sort_date.is_none());

        let dated = BlogPost {
            title: "Dated".into(),
            publish_date: Some("2023-12-01T10:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(
            normalize_blog_post(&dated).meta.as_deref(),
            Some("December 1, 2023")
        );
    }

    #[test]
    fn test_empty_record_gets_fallbacks() {
        let result = normalize(&ContentRecord::CaseStudy(CaseStudy::default()));
        assert_eq!(result.title, "Untitled Case Study");
        assert_eq!(result.url, "/case-studies/untitled");
        assert_eq!(result.category, "Case Study");
        assert!(result.description.is_empty());
        assert!(result.meta.is_none());
        assert!(result.image.is_none());
    }

    #[test]
    fn test_url_derived_from_title_when_slug_missing() {
        let service = Service {
            title: "Web Design & UX".into(),
            ..Default::default()
        };
        assert_eq!(normalize_service(&service).url, "/services/web-design-ux");
    }

    #[test]
    fn test_service_description_falls_back_to_full_description() {
        let service = Service {
            title: "SEO".into(),
            description: "  ".into(),
            full_description: Some("Search engine optimisation".into()),
            ..Default::default()
        };
        assert_eq!(
            normalize_service(&service).description,
            "Search engine optimisation"
        );
    }

    #[test]
    fn test_case_study_meta_and_category() {
        let study = CaseStudy {
            title: "Checkout rebuild".into(),
            client: Some("Acme".into()),
            industry: Some("Retail".into()),
            challenge: Some("Slow checkout".into()),
            ..Default::default()
        };
        let result = normalize_case_study(&study);
        assert_eq!(result.meta.as_deref(), Some("Acme • Retail"));
        assert_eq!(result.category, "Retail");
        assert_eq!(result.description, "Slow checkout");
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(parse_date("2024-01-31"), NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(
            parse_date("2024-01-31T23:00:00+00:00"),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert_eq!(parse_date("last tuesday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Hello,   World!  "), "hello-world");
        assert_eq!(slugify("Café Menus"), "café-menus");
        assert_eq!(slugify("---"), "");
    }
}
