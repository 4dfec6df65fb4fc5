//! HTTP client for the blog API
//!
//! Implements `BlogRepository` against a JSON API:
//! - `GET {base}/posts?category=&tag=&q=`
//! - `GET {base}/categories`
//! - `GET {base}/tags`
//! - `GET {base}/posts/featured?limit=N`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::BlogConfig;
use crate::domain::content::BlogPost;
use crate::domain::listing::{BlogFilter, BlogRepository, TagCount};
use crate::domain::state::ALL_CATEGORIES;
use crate::error::{Error, Result};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Longest error body kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Blog API client
#[derive(Clone)]
pub struct BlogApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl std::fmt::Debug for BlogApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for creating a BlogApiClient
#[derive(Default)]
pub struct BlogApiClientBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl BlogApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<BlogApiClient> {
        let base_url = self
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(Error::BlogApiNotConfigured)?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(
                self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(Error::NetworkError)?;

        Ok(BlogApiClient {
            http_client,
            base_url,
        })
    }
}

impl BlogApiClient {
    pub fn builder() -> BlogApiClientBuilder {
        BlogApiClientBuilder::new()
    }

    /// Create a client from configuration
    ///
    /// Fails with `BlogApiNotConfigured` when no base URL is set.
    pub fn from_config(config: &BlogConfig) -> Result<Self> {
        let mut builder = Self::builder().timeout_secs(config.timeout_secs);
        if let Some(url) = config.resolved_api_base_url() {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, params = query.len(), "Blog API request");

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(Error::NetworkError)?;

        let response = check_status(response).await?;
        response.json::<T>().await.map_err(Error::NetworkError)
    }
}

/// Map a non-2xx response to `Error::BlogApi`
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let mut message: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
    if message.is_empty() {
        message = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }

    Err(Error::BlogApi {
        status: status.as_u16(),
        message,
    })
}

/// Query parameters for a filter; "All" and blank values are omitted
fn filter_params(filter: &BlogFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(category) = filter
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
    {
        params.push(("category", category.to_string()));
    }
    if let Some(tag) = filter.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        params.push(("tag", tag.to_string()));
    }
    if let Some(query) = filter.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        params.push(("q", query.to_string()));
    }
    params
}

#[async_trait]
impl BlogRepository for BlogApiClient {
    async fn list_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>> {
        self.get_json("/posts", &filter_params(filter)).await
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        self.get_json("/categories", &[]).await
    }

    async fn list_tags(&self) -> Result<Vec<TagCount>> {
        self.get_json("/tags", &[]).await
    }

    async fn featured_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
        self.get_json("/posts/featured", &[("limit", limit.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> BlogApiClient {
        BlogApiClient::builder()
            .base_url(format!("{}/", server.base_url()))
            .timeout_secs(5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let err = BlogApiClient::builder().build().unwrap_err();
        assert_eq!(err.code(), "E102");

        let err = BlogApiClient::builder().base_url("  ").build().unwrap_err();
        assert_eq!(err.code(), "E102");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BlogApiClient::builder()
            .base_url("https://cms.example.com/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://cms.example.com/api");
    }

    #[test]
    fn test_filter_params_skip_defaults() {
        let filter = BlogFilter {
            category: Some("All".into()),
            tag: Some(" ".into()),
            query: Some("seo tips".into()),
        };
        assert_eq!(filter_params(&filter), vec![("q", "seo tips".to_string())]);
        assert!(filter_params(&BlogFilter::default()).is_empty());
    }

    #[tokio::test]
    async fn test_list_posts_sends_filters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/posts")
                    .query_param("category", "Web Design")
                    .query_param("tag", "ui");
                then.status(200).json_body(json!([
                    {"slug": "grid", "title": "Grid Layouts", "category": "Web Design", "tags": ["ui"]}
                ]));
            })
            .await;

        let filter = BlogFilter {
            category: Some("Web Design".into()),
            tag: Some("ui".into()),
            query: None,
        };
        let posts = client(&server).list_posts(&filter).await.unwrap();

        mock.assert_async().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Grid Layouts");
    }

    #[tokio::test]
    async fn test_categories_and_tags() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/categories");
                then.status(200).json_body(json!(["SEO", "Branding"]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tags");
                then.status(200)
                    .json_body(json!([{"name": "ui", "count": 4}, {"name": "seo"}]));
            })
            .await;

        let client = client(&server);
        assert_eq!(client.list_categories().await.unwrap(), vec!["SEO", "Branding"]);
        assert_eq!(
            client.list_tags().await.unwrap(),
            vec![TagCount::new("ui", 4), TagCount::new("seo", 0)]
        );
    }

    #[tokio::test]
    async fn test_featured_sends_limit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/posts/featured").query_param("limit", "3");
                then.status(200).json_body(json!([{"title": "Pinned", "featured": true}]));
            })
            .await;

        let posts = client(&server).featured_posts(3).await.unwrap();
        mock.assert_async().await;
        assert!(posts[0].featured);
    }

    #[tokio::test]
    async fn test_server_error_maps_to_blog_api() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/categories");
                then.status(503).body("upstream maintenance");
            })
            .await;

        let err = client(&server).list_categories().await.unwrap_err();
        match &err {
            Error::BlogApi { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "upstream maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_reason() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tags");
                then.status(404);
            })
            .await;

        let err = client(&server).list_tags().await.unwrap_err();
        assert!(err.to_string().contains("Not Found"), "{err}");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = BlogApiClient::builder()
            .base_url("http://127.0.0.1:9")
            .timeout_secs(1)
            .build()
            .unwrap();
        let err = client.list_categories().await.unwrap_err();
        assert_eq!(err.code(), "E100");
    }

    #[test]
    fn test_from_config_with_url() {
        let config = BlogConfig {
            api_base_url: Some("https://cms.example.com/api".into()),
            ..Default::default()
        };
        assert!(BlogApiClient::from_config(&config).is_ok());
    }
}
