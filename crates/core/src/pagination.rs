//! Pagination parameters and derived metadata.
//!
//! List endpoints accept 1-based `page` and `limit` query parameters. The
//! repository layer converts them to LIMIT/OFFSET via [`PageParams`], and
//! handlers attach a [`Pagination`] block to every paged response.

use serde::Serialize;

/// Default rows per page when the caller omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Hard cap on rows per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number to >= 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Validated pagination window derived from raw query parameters.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    /// Build from raw (possibly absent or out-of-range) query values.
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        }
    }

    /// SQL OFFSET for this window: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Pagination metadata attached to paged list responses.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    /// Total rows matching the filters across the whole table.
    pub total: i64,
    /// `ceil(total / limit)`.
    pub pages: i64,
    pub current_page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Derive metadata from a filtered total count and the requested window.
    ///
    /// `total` reflects the filters but never the pagination window.
    pub fn new(total: i64, params: PageParams) -> Self {
        Self {
            total,
            pages: total_pages(total, params.limit),
            current_page: params.page,
            limit: params.limit,
        }
    }
}

/// Number of pages needed to cover `total` rows at `limit` per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
