//! Pagination types
//!
//! Page numbers are 1-based. The response envelope is
//! `{ "data": [...], "meta": { "total", "page", "limit" } }`.

use serde::{Deserialize, Serialize};

/// Default page size
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size a client may request
pub const MAX_LIMIT: u32 = 100;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a page request, clamping `limit` to [`MAX_LIMIT`].
    ///
    /// Returns `None` when `page` or `limit` is zero.
    pub fn new(page: u32, limit: u32) -> Option<Self> {
        if page == 0 || limit == 0 {
            return None;
        }
        Some(Self {
            page,
            limit: limit.min(MAX_LIMIT),
        })
    }

    /// Row offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Matching rows before pagination
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, page: PageRequest) -> Self {
        Self {
            data,
            meta: PageMeta {
                total,
                page: page.page,
                limit: page.limit,
            },
        }
    }
}
