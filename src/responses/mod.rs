use serde::Serialize;

use crate::pagination::Pagination;

pub mod categories;
pub mod products;
pub mod tags;

/// Envelope wrapped around every list response.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// Number of records matching the filter, across all pages.
    pub total: usize,
    /// Relative link to the next page, or null on the last page.
    pub next: Option<String>,
    /// Relative link to the previous page, or null on the first page.
    pub previous: Option<String>,
    /// Records on the requested page.
    pub results: Vec<T>,
}

/// Query parameters reproduced in the page links.
#[derive(Serialize)]
struct PageParams<'a> {
    page: usize,
    per_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

impl<T> Page<T> {
    /// Wrap one page of `results`, deriving the neighbour links from the
    /// window that produced it.
    pub fn new(
        path: &str,
        total: usize,
        pagination: Pagination,
        search: Option<&str>,
        results: Vec<T>,
    ) -> Self {
        let next = pagination
            .has_next(total)
            .then(|| page_link(path, pagination.page + 1, pagination.per_page, search))
            .flatten();
        let previous = pagination
            .has_previous()
            .then(|| page_link(path, pagination.page - 1, pagination.per_page, search))
            .flatten();

        Self {
            total,
            next,
            previous,
            results,
        }
    }
}

fn page_link(path: &str, page: usize, per_page: usize, search: Option<&str>) -> Option<String> {
    let params = PageParams {
        page,
        per_page,
        search,
    };

    serde_qs::to_string(&params)
        .ok()
        .map(|query| format!("{path}?{query}"))
}
