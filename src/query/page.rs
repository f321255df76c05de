//! Pager
//!
//! Page/limit parsing with tolerant clamping, and the pagination summary
//! attached to every list response.

use serde::Serialize;

// == Page Limits ==
/// Service-wide pagination bounds.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Page size when the request omits `limit`
    pub default_limit: usize,
    /// Hard cap on any requested `limit`
    pub max_limit: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 50,
        }
    }
}

// == Parsing ==
/// Parses a 1-based page number. Unparseable or sub-1 values clamp to 1;
/// out-of-range requests are tolerated, never rejected.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.parse::<i64>().ok())
        .map(|p| if p < 1 { 1 } else { p as usize })
        .unwrap_or(1)
}

/// Parses a page size, clamped into `[1, max_limit]`. Unparseable or absent
/// values fall back to the default.
pub fn parse_limit(raw: Option<&str>, limits: &PageLimits) -> usize {
    raw.and_then(|v| v.parse::<usize>().ok())
        .map(|l| l.clamp(1, limits.max_limit))
        .unwrap_or(limits.default_limit)
}

// == Page Info ==
/// Pagination summary for a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    /// Computes the summary for `total` matching records viewed through
    /// pages of `limit` records.
    ///
    /// Invariants: `total_pages = ceil(total / limit)`,
    /// `has_next ⇔ page * limit < total`, `has_prev ⇔ page > 1`.
    ///
    /// `page` can be any accepted value, so the arithmetic saturates instead
    /// of overflowing; a saturated product is past any real total.
    pub fn new(total: usize, page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            current_page: page,
            total_pages: total.div_ceil(limit),
            total_items: total,
            has_next: page.saturating_mul(limit) < total,
            has_prev: page > 1,
        }
    }
}

/// Offset of the first record on a 1-based page. Saturates for pages beyond
/// the addressable range.
pub fn offset(page: usize, limit: usize) -> usize {
    page.saturating_sub(1).saturating_mul(limit)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_defaults_and_clamps() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-5")), 1);
        assert_eq!(parse_page(Some("garbage")), 1);
    }

    #[test]
    fn test_parse_limit_defaults_and_caps() {
        let limits = PageLimits::default();
        assert_eq!(parse_limit(None, &limits), 10);
        assert_eq!(parse_limit(Some("25"), &limits), 25);
        assert_eq!(parse_limit(Some("500"), &limits), 50);
        assert_eq!(parse_limit(Some("0"), &limits), 1);
        assert_eq!(parse_limit(Some("nope"), &limits), 10);
    }

    #[test]
    fn test_page_info_middle_page() {
        let info = PageInfo::new(25, 2, 10);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_items, 25);
        assert!(info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn test_page_info_last_partial_page() {
        // 25 records, limit 10, page 3: five records left, no next page
        let info = PageInfo::new(25, 3, 10);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn test_page_info_first_page() {
        let info = PageInfo::new(25, 1, 10);
        assert!(info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn test_page_info_empty_set() {
        let info = PageInfo::new(0, 1, 10);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn test_page_info_exact_multiple() {
        let info = PageInfo::new(30, 3, 10);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
    }

    #[test]
    fn test_page_past_end_keeps_metadata() {
        let info = PageInfo::new(25, 9, 10);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 10), 20);
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        let page = usize::MAX;
        assert_eq!(offset(page, 10), usize::MAX);

        let info = PageInfo::new(25, page, 10);
        assert_eq!(info.total_pages, 3);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn test_page_info_serializes_camel_case() {
        let info = PageInfo::new(25, 3, 10);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("currentPage"));
        assert!(json.contains("totalPages"));
        assert!(json.contains("totalItems"));
        assert!(json.contains("hasNext"));
        assert!(json.contains("hasPrev"));
    }
}
