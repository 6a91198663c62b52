//! Pagination envelope returned by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of items plus its position in the full result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<R> {
    pub items: Vec<R>,
    /// Item count across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    pub size: u32,
    /// Page count; 0 when there are no items.
    pub pages: u32,
}

impl<R> Page<R> {
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            total: self.total,
            page: self.page,
            size: self.size,
            pages: self.pages,
        }
    }

    pub fn into_parts(self) -> (Vec<R>, PageMeta) {
        let meta = self.meta();
        (self.items, meta)
    }
}

/// Pagination metadata without the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

impl PageMeta {
    /// Metadata before anything has been loaded.
    pub fn empty(size: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            size,
            pages: 0,
        }
    }

    /// Pages needed for `total` items at `size` per page.
    pub fn pages_for(total: u64, size: u32) -> u32 {
        if size == 0 {
            return 0;
        }
        let pages = total.div_ceil(u64::from(size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether `page` may be requested. Any positive page is allowed while
    /// the page count is unknown.
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && (self.pages == 0 || page <= self.pages)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
