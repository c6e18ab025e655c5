use serde::{Deserialize, Serialize};

/// Page size used when a list request does not specify one.
pub const DEFAULT_PER_PAGE: usize = 10;
/// Upper bound on the requested page size.
pub const MAX_PER_PAGE: usize = 100;

/// Page window applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Number of records per page.
    pub per_page: usize,
}

impl Pagination {
    /// Build a window from optional query parameters, clamping out-of-range values.
    pub fn from_params(page: Option<usize>, per_page: Option<usize>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        Self { page, per_page }
    }

    /// Row offset of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Whether a further page exists for `total` records.
    pub fn has_next(&self, total: usize) -> bool {
        self.page * self.per_page < total
    }

    /// Whether a preceding page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
