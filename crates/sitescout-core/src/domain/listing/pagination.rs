//! Numbered pagination for the blog listing

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ListingConfig;
use crate::domain::state::SearchState;

/// One entry in the page-index list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => write!(f, "…"),
        }
    }
}

/// Position of the current page within the filtered set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub page_size: usize,
    pub items: Vec<PageItem>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// A rendered navigation entry with its shareable query string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub label: String,
    /// `None` for an ellipsis or a disabled previous/next link
    pub href: Option<String>,
    pub current: bool,
}

/// Computes slices and page-index lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    max_visible_pages: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(6, 5)
    }
}

/// Largest page-number window a paginator will render
pub const MAX_VISIBLE_PAGES_LIMIT: u32 = 99;

impl Paginator {
    /// Create a paginator; sizes below one are raised to one and the
    /// window is capped at `MAX_VISIBLE_PAGES_LIMIT`
    pub fn new(page_size: usize, max_visible_pages: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            max_visible_pages: max_visible_pages.clamp(1, MAX_VISIBLE_PAGES_LIMIT),
        }
    }

    pub fn from_config(config: &ListingConfig) -> Self {
        Self::new(config.page_size, config.max_visible_pages)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(count / page_size))`
    pub fn total_pages(&self, count: usize) -> u32 {
        let pages = count.div_ceil(self.page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Nearest valid page for a requested one
    pub fn clamp_page(&self, page: u32, count: usize) -> u32 {
        page.clamp(1, self.total_pages(count))
    }

    /// Items on a page; the page is clamped first
    pub fn slice<'a, T>(&self, items: &'a [T], page: u32) -> &'a [T] {
        let page = self.clamp_page(page, items.len()) as usize;
        let start = ((page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Page numbers to render, with `…` where pages are skipped
    ///
    /// Page 1 and the last page are always present, and the current page
    /// sits inside a window of `max_visible_pages` consecutive pages.
    pub fn page_items(&self, page: u32, total_pages: u32) -> Vec<PageItem> {
        let total = total_pages.max(1);
        let page = page.clamp(1, total);
        let window = self.max_visible_pages;

        if total <= window.saturating_add(2) {
            return (1..=total).map(PageItem::Page).collect();
        }

        let mut start = page.saturating_sub(window / 2).max(1);
        let mut end = start.saturating_add(window - 1);
        if end > total {
            end = total;
            start = total.saturating_sub(window - 1).max(1);
        }

        let mut items = Vec::with_capacity(window as usize + 4);
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < total {
            if end < total - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(total));
        }
        items
    }

    /// Slice and describe one page of a filtered set
    pub fn paginate<T: Clone>(&self, items: &[T], page: u32) -> (Vec<T>, PageInfo) {
        let total_pages = self.total_pages(items.len());
        let current_page = self.clamp_page(page, items.len());
        let info = PageInfo {
            current_page,
            total_pages,
            total_items: items.len(),
            page_size: self.page_size,
            items: self.page_items(current_page, total_pages),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        };
        (self.slice(items, current_page).to_vec(), info)
    }
}

/// Navigation links for a page, previous and next included
///
/// Links keep the state's category, tag, and query.
pub fn page_links(info: &PageInfo, state: &SearchState, base_path: &str) -> Vec<PageLink> {
    let href = |page: u32| format!("{base_path}{}", state.with_page(page).to_listing_query_string());

    let mut links = Vec::with_capacity(info.items.len() + 2);
    links.push(PageLink {
        label: "Previous".to_string(),
        href: info
            .has_previous
            .then(|| href(info.current_page - 1)),
        current: false,
    });
    for item in &info.items {
        links.push(match item {
            PageItem::Page(page) => PageLink {
                label: page.to_string(),
                href: Some(href(*page)),
                current: *page == info.current_page,
            },
            PageItem::Ellipsis => PageLink {
                label: item.to_string(),
                href: None,
                current: false,
            },
        });
    }
    links.push(PageLink {
        label: "Next".to_string(),
        href: info.has_next.then(|| href(info.current_page + 1)),
        current: false,
    });
    links
}
