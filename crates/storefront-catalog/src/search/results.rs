//! Result pages and pagination.

use serde::{Deserialize, Serialize};

use crate::catalog::{Post, Product};

/// Pagination info for a result page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages (never below 1, even for an empty list).
    pub total_pages: u32,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Compute pagination for a listing of `total` items.
    pub fn new(page: u32, per_page: u32, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page as usize) as u32
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// 1-indexed number of the first item on this page, 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page as usize - 1) * self.per_page as usize + 1
        }
    }

    /// 1-indexed number of the last item on this page.
    pub fn end_item(&self) -> usize {
        (self.page as usize * self.per_page as usize).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 12, 0)
    }
}

/// One page of an ordered result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> ResultPage<T> {
    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice an ordered list into a fixed-size page.
///
/// A `page` outside `[1, total_pages]` yields an empty `items` slice instead
/// of an error, mirroring lenient pager navigation in the UI. The pagination
/// block still describes the whole list.
pub fn paginate<T: Clone>(items: &[T], per_page: u32, page: u32) -> ResultPage<T> {
    let pagination = Pagination::new(page, per_page, items.len());

    let page_items = if page == 0 {
        Vec::new()
    } else {
        let start = (page as usize - 1) * pagination.per_page as usize;
        items
            .iter()
            .skip(start)
            .take(pagination.per_page as usize)
            .cloned()
            .collect()
    };

    ResultPage {
        items: page_items,
        pagination,
    }
}

/// Combined product and post search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHits {
    /// Matching products.
    pub products: Vec<Product>,
    /// Matching posts.
    pub posts: Vec<Post>,
    /// Combined hit count.
    pub total: usize,
}

impl SearchHits {
    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
