/**
 * Pagination
 *
 * Page/limit coercion and the pagination metadata returned by the list
 * endpoint. Raw query parameters are clamped to sane bounds: page >= 1,
 * 1 <= limit <= MAX_PAGE_SIZE.
 */

use serde::{Deserialize, Serialize};

/// Default page when the query parameter is absent
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the query parameter is absent
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamped pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number
    pub page: i64,
    /// Page size
    pub limit: i64,
}

impl PageParams {
    /// Build parameters from raw query values, applying defaults and bounds
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of rows to skip: `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Pagination metadata returned alongside a page of posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of posts
    pub total_count: i64,
    /// Total number of pages: `ceil(total_count / page_size)`
    pub total_pages: i64,
    /// The page this response covers
    pub current_page: i64,
    /// Page size used for this response
    pub page_size: i64,
}

impl PageMeta {
    /// Compute metadata for a page
    pub fn new(total_count: i64, params: PageParams) -> Self {
        // params.limit >= 1, so the ceiling division is safe
        let total_pages = (total_count + params.limit - 1) / params.limit;
        Self {
            total_count,
            total_pages,
            current_page: params.page,
            page_size: params.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let params = PageParams::from_query(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_arithmetic() {
        let params = PageParams::from_query(Some(3), Some(10));
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_clamps_non_positive_page() {
        assert_eq!(PageParams::from_query(Some(0), None).page, 1);
        assert_eq!(PageParams::from_query(Some(-5), None).page, 1);
    }

    #[test]
    fn test_clamps_limit_bounds() {
        assert_eq!(PageParams::from_query(None, Some(0)).limit, 1);
        assert_eq!(PageParams::from_query(None, Some(-1)).limit, 1);
        assert_eq!(PageParams::from_query(None, Some(1000)).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let params = PageParams::from_query(Some(1), Some(10));
        assert_eq!(PageMeta::new(0, params).total_pages, 0);
        assert_eq!(PageMeta::new(1, params).total_pages, 1);
        assert_eq!(PageMeta::new(10, params).total_pages, 1);
        assert_eq!(PageMeta::new(11, params).total_pages, 2);
        assert_eq!(PageMeta::new(21, params).total_pages, 3);
    }

    #[test]
    fn test_meta_echoes_request() {
        let params = PageParams::from_query(Some(2), Some(25));
        let meta = PageMeta::new(60, params);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.page_size, 25);
        assert_eq!(meta.total_count, 60);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PageMeta::new(5, PageParams::from_query(None, None));
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["totalCount"], 5);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["pageSize"], 10);
    }
}
