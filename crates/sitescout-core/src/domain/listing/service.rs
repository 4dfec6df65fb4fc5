//! Blog listing controller
//!
//! Drives a listing page through `Idle → Loading → Loaded | Errored`.
//! Every load takes a monotonic token; a load that completes after a newer
//! one has started is discarded rather than overwriting fresher state.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::config::ListingConfig;
use crate::domain::content::{BlogPost, parse_date};
use crate::domain::state::SearchState;
use crate::error::Error;

use super::adapter::{BlogAdapter, Fetched};
use super::entity::{
    DegradedSources, ListingError, ListingPage, LoadOutcome, LoadPhase, empty_state_message,
};
use super::pagination::{Paginator, page_links};
use super::repository_trait::{BlogFilter, TagCount};
use super::specification::ListingSpecBuilder;

const DEFAULT_BASE_PATH: &str = "/blog";

#[derive(Debug, Default)]
struct Inner {
    phase: LoadPhase,
    latest_token: u64,
    last_requested: Option<SearchState>,
    last_loaded: Option<ListingPage>,
}

/// Loads blog listing pages and tracks their lifecycle
pub struct ListingController {
    adapter: BlogAdapter,
    paginator: Paginator,
    featured_count: usize,
    base_path: String,
    next_token: AtomicU64,
    inner: Mutex<Inner>,
}

impl ListingController {
    pub fn new(adapter: BlogAdapter, config: &ListingConfig) -> Self {
        Self {
            adapter,
            paginator: Paginator::from_config(config),
            featured_count: config.featured_count,
            base_path: DEFAULT_BASE_PATH.to_string(),
            next_token: AtomicU64::new(0),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Path prepended to page links
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    /// Last page built from a successful posts fetch
    pub fn last_loaded(&self) -> Option<ListingPage> {
        self.lock().last_loaded.clone()
    }

    /// Load the listing for a state
    ///
    /// Posts, categories, tags, and featured posts are fetched concurrently.
    /// Only a posts failure moves the controller to `Errored`; the returned
    /// page then keeps the last loaded results and carries a retry banner.
    pub async fn load(&self, state: &SearchState) -> LoadOutcome {
        let token = self.begin(state);
        let filter = BlogFilter::from_state(state);

        let (posts, categories, tags, featured) = tokio::join!(
            self.adapter.fetch_posts(&filter),
            self.adapter.fetch_categories(),
            self.adapter.fetch_tags(),
            self.adapter.fetch_featured(self.featured_count),
        );

        let mut inner = self.lock();
        if token != inner.latest_token {
            debug!(token, latest = inner.latest_token, "Discarding stale listing load");
            return LoadOutcome::Superseded { token };
        }

        let page = match posts {
            Ok(Fetched { value, .. }) => {
                let page = self.build_page(state, &value, categories, tags, featured);
                info!(
                    page = page.page_info.current_page,
                    total_pages = page.page_info.total_pages,
                    posts = page.page_info.total_items,
                    "Listing loaded"
                );
                inner.phase = LoadPhase::Loaded;
                inner.last_loaded = Some(page.clone());
                page
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "Listing posts fetch failed");
                inner.phase = LoadPhase::Errored;
                self.errored_page(inner.last_loaded.as_ref(), state, &e, categories, tags, featured)
            }
        };

        LoadOutcome::Applied(page)
    }

    /// Repeat the most recently requested load
    pub async fn retry(&self) -> Option<LoadOutcome> {
        let state = self.lock().last_requested.clone()?;
        Some(self.load(&state).await)
    }

    /// Return a finished load to `Idle`
    pub fn settle(&self) {
        let mut inner = self.lock();
        if matches!(inner.phase, LoadPhase::Loaded | LoadPhase::Errored) {
            inner.phase = LoadPhase::Idle;
        }
    }

    fn begin(&self, state: &SearchState) -> u64 {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst) + 1;
        let mut inner = self.lock();
        inner.latest_token = token;
        inner.phase = LoadPhase::Loading;
        inner.last_requested = Some(state.clone());
        token
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn build_page(
        &self,
        state: &SearchState,
        posts: &[BlogPost],
        categories: Fetched<Vec<String>>,
        tags: Fetched<Vec<TagCount>>,
        featured: Fetched<Vec<BlogPost>>,
    ) -> ListingPage {
        let mut filtered = ListingSpecBuilder::from_state(state).filter(posts);
        sort_newest_first(&mut filtered);

        let (page_posts, page_info) = self.paginator.paginate(&filtered, state.page);
        let state = state.with_page(page_info.current_page);
        let links = page_links(&page_info, &state, &self.base_path);
        let empty_state = filtered.is_empty().then(|| empty_state_message(&state));

        ListingPage {
            posts: page_posts,
            page_info,
            links,
            degraded: DegradedSources {
                categories: categories.degraded,
                tags: tags.degraded,
                featured: featured.degraded,
            },
            categories: categories.value,
            tags: tags.value,
            featured: featured.value,
            error: None,
            empty_state,
            state,
        }
    }

    fn errored_page(
        &self,
        previous: Option<&ListingPage>,
        state: &SearchState,
        error: &Error,
        categories: Fetched<Vec<String>>,
        tags: Fetched<Vec<TagCount>>,
        featured: Fetched<Vec<BlogPost>>,
    ) -> ListingPage {
        let banner = ListingError {
            code: error.code().to_string(),
            message: error.to_string(),
            retryable: true,
        };

        match previous {
            Some(previous) => ListingPage {
                error: Some(banner),
                ..previous.clone()
            },
            None => {
                let mut page = self.build_page(state, &[], categories, tags, featured);
                page.empty_state = None;
                page.error = Some(banner);
                page
            }
        }
    }
}

/// Stable sort by publish date, newest first; undated posts go last
fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by_key(|post| {
        Reverse(
            post.publish_date
                .as_deref()
                .and_then(parse_date)
                .unwrap_or_default(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::BlogRepository;
    use crate::error::Result;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    fn post(n: u32, category: &str) -> BlogPost {
        BlogPost {
            slug: Some(format!("post-{n}")),
            title: format!("Post {n}"),
            category: Some(category.to_string()),
            publish_date: Some(format!("2024-01-{:02}", n)),
            ..Default::default()
        }
    }

    /// Serves fixed posts; can be switched offline and slowed per category
    struct FakeRepository {
        posts: Vec<BlogPost>,
        offline: AtomicBool,
        slow_category: Option<String>,
    }

    impl FakeRepository {
        fn new(posts: Vec<BlogPost>) -> Self {
            Self {
                posts,
                offline: AtomicBool::new(false),
                slow_category: None,
            }
        }
    }

    #[async_trait]
    impl BlogRepository for FakeRepository {
        async fn list_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>> {
            if filter.category.is_some() && filter.category == self.slow_category {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            if self.offline.load(Ordering::SeqCst) {
                return Err(Error::BlogApi {
                    status: 502,
                    message: "bad gateway".into(),
                });
            }
            Ok(self.posts.clone())
        }

        async fn list_categories(&self) -> Result<Vec<String>> {
            Err(Error::Other("no categories endpoint".into()))
        }

        async fn list_tags(&self) -> Result<Vec<TagCount>> {
            Ok(vec![TagCount::new("ui", 2)])
        }

        async fn featured_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
            Ok(self.posts.iter().take(limit).cloned().collect())
        }
    }

    fn controller(repo: Arc<FakeRepository>) -> ListingController {
        let adapter = BlogAdapter::new(repo, vec!["Web Design".into(), "SEO".into()]);
        ListingController::new(adapter, &ListingConfig::default())
    }

    fn fourteen_posts() -> Vec<BlogPost> {
        (1..=14).map(|n| post(n, "SEO")).collect()
    }

    #[tokio::test]
    async fn test_loads_last_partial_page() {
        let controller = controller(Arc::new(FakeRepository::new(fourteen_posts())));
        let outcome = controller.load(&SearchState::default().with_page(3)).await;
        let page = outcome.page().unwrap();

        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.page_info.total_pages, 3);
        assert!(!page.page_info.has_next);
        // newest first, so page 3 holds the two oldest posts
        assert_eq!(page.posts[0].title, "Post 2");
        assert_eq!(page.posts[1].title, "Post 1");
        assert_eq!(controller.phase(), LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_secondary_failures_degrade() {
        let controller = controller(Arc::new(FakeRepository::new(fourteen_posts())));
        let outcome = controller.load(&SearchState::default()).await;
        let page = outcome.page().unwrap();

        assert!(page.degraded.categories);
        assert!(!page.degraded.tags);
        assert_eq!(page.categories, vec!["All", "Web Design", "SEO"]);
        assert_eq!(page.featured.len(), 3);
        assert!(page.error.is_none());
    }

    #[tokio::test]
    async fn test_out_of_range_page_clamps() {
        let controller = controller(Arc::new(FakeRepository::new(fourteen_posts())));
        let outcome = controller.load(&SearchState::default().with_page(40)).await;
        let page = outcome.page().unwrap();
        assert_eq!(page.page_info.current_page, 3);
        assert_eq!(page.state.page, 3);
    }

    #[tokio::test]
    async fn test_filters_applied_client_side() {
        let mut posts = fourteen_posts();
        posts.push(post(20, "Marketing"));
        let controller = controller(Arc::new(FakeRepository::new(posts)));

        let state = SearchState::default().with_category(Some("Marketing"));
        let outcome = controller.load(&state).await;
        let page = outcome.page().unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.page_info.total_pages, 1);
    }

    #[tokio::test]
    async fn test_empty_state_message() {
        let controller = controller(Arc::new(FakeRepository::new(fourteen_posts())));
        let state = SearchState::new("zzz").with_category(Some("SEO"));
        let outcome = controller.load(&state).await;
        let page = outcome.page().unwrap();
        assert!(page.is_empty());
        assert_eq!(
            page.empty_state.as_deref(),
            Some("No posts found for \"zzz\" in SEO")
        );
    }

    #[tokio::test]
    async fn test_error_keeps_last_results_and_retries() {
        let repo = Arc::new(FakeRepository::new(fourteen_posts()));
        let controller = controller(repo.clone());

        let loaded = controller.load(&SearchState::default()).await;
        let loaded_posts = loaded.page().unwrap().posts.clone();

        repo.offline.store(true, Ordering::SeqCst);
        let outcome = controller.load(&SearchState::default().with_page(2)).await;
        let page = outcome.page().unwrap();
        assert_eq!(controller.phase(), LoadPhase::Errored);
        assert_eq!(page.posts, loaded_posts);
        let banner = page.error.as_ref().unwrap();
        assert!(banner.retryable);
        assert_eq!(banner.code, "E101");

        repo.offline.store(false, Ordering::SeqCst);
        let retried = controller.retry().await.unwrap();
        let page = retried.page().unwrap();
        assert!(page.error.is_none());
        assert_eq!(page.page_info.current_page, 2);
        assert_eq!(controller.phase(), LoadPhase::Loaded);

        controller.settle();
        assert_eq!(controller.phase(), LoadPhase::Idle);
    }

    #[tokio::test]
    async fn test_first_load_error_returns_empty_page() {
        let repo = Arc::new(FakeRepository::new(fourteen_posts()));
        repo.offline.store(true, Ordering::SeqCst);
        let controller = controller(repo);

        let outcome = controller.load(&SearchState::default()).await;
        let page = outcome.page().unwrap();
        assert!(page.posts.is_empty());
        assert!(page.error.is_some());
        assert!(page.empty_state.is_none());
        assert_eq!(page.page_info.total_pages, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_load_is_discarded() {
        let mut repo = FakeRepository::new(fourteen_posts());
        repo.slow_category = Some("SEO".to_string());
        let controller = controller(Arc::new(repo));

        let slow = SearchState::default().with_category(Some("SEO"));
        let fast = SearchState::default();

        let (first, second) = tokio::join!(controller.load(&slow), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            controller.load(&fast).await
        });

        assert!(matches!(first, LoadOutcome::Superseded { token: 1 }));
        let page = second.page().unwrap();
        assert_eq!(page.state.category, None);
        assert_eq!(controller.last_loaded().unwrap().state.category, None);
        assert_eq!(controller.phase(), LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_retry_without_history() {
        let controller = controller(Arc::new(FakeRepository::new(Vec::new())));
        assert!(controller.retry().await.is_none());
    }
}
