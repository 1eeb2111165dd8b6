//! Pagination state.
//!
//! All three fields are signed so callers can request out-of-range values and
//! rely on clamping:
//!
//! - `page_size` is at least 1
//! - `page_count` is at least -1, where -1 means the count is unknown (owned by
//!   an external paginator) and 0 means there are no pages
//! - `page_index` is at least 0 and, when `page_count > 0`, at most
//!   `page_count - 1`

use serde::{Deserialize, Serialize};

/// Page size used when no initial pagination is configured.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page count meaning "not computed".
pub const UNKNOWN_PAGE_COUNT: i64 = -1;

/// Current page position of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationState {
    /// Zero-based index of the visible page.
    pub page_index: i64,
    /// Rows per page.
    pub page_size: i64,
    /// Total pages, or [`UNKNOWN_PAGE_COUNT`].
    pub page_count: i64,
}

impl Default for PaginationState {
    fn default() -> Self {
        default_pagination_state()
    }
}

/// Pagination every table starts from unless seeded: `{0, 10, -1}`.
pub fn default_pagination_state() -> PaginationState {
    PaginationState {
        page_index: 0,
        page_size: DEFAULT_PAGE_SIZE,
        page_count: UNKNOWN_PAGE_COUNT,
    }
}

/// Number of pages needed for `row_count` rows, or 0 without rows.
///
/// # Examples
///
/// ```
/// use tabula_model::page_count_for;
///
/// assert_eq!(page_count_for(95, 10), 10);
/// assert_eq!(page_count_for(95, 20), 5);
/// assert_eq!(page_count_for(0, 10), 0);
/// ```
pub fn page_count_for(row_count: usize, page_size: i64) -> i64 {
    if row_count == 0 {
        return 0;
    }
    let rows = i64::try_from(row_count).unwrap_or(i64::MAX);
    let size = page_size.max(1);
    rows.div_euclid(size) + i64::from(rows.rem_euclid(size) != 0)
}

impl PaginationState {
    pub fn new(page_index: i64, page_size: i64, page_count: i64) -> Self {
        Self {
            page_index,
            page_size,
            page_count,
        }
    }

    /// Largest reachable page index; unbounded while the count is unknown or zero.
    pub fn max_page_index(&self) -> i64 {
        if self.page_count > 0 {
            self.page_count - 1
        } else {
            i64::MAX
        }
    }

    /// Index of the first row on the current page.
    pub fn top_row_index(&self) -> i64 {
        self.page_size.saturating_mul(self.page_index)
    }

    /// Clamps every field into its allowed range.
    pub fn normalized(self) -> Self {
        let page_size = self.page_size.max(1);
        let page_count = self.page_count.max(UNKNOWN_PAGE_COUNT);
        let bounded = Self {
            page_index: 0,
            page_size,
            page_count,
        };
        Self {
            page_index: self.page_index.clamp(0, bounded.max_page_index()),
            ..bounded
        }
    }

    /// Whether all field invariants hold.
    pub fn is_valid(&self) -> bool {
        self.page_size >= 1
            && self.page_count >= UNKNOWN_PAGE_COUNT
            && self.page_index >= 0
            && self.page_index <= self.max_page_index()
    }
}
