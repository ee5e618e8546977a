//! Exhaustive catalog pagination.
//!
//! The catalog answers a filtered query with the first page and a `next` cursor.
//! The paginator follows cursors until none is left and accumulates every entry
//! into a single [`CatalogPage`].

use std::fmt;

use libstats_client::{get_json, validate_url, RemoteFetch};
use tracing::{debug, warn};

use crate::config::ServiceEndpoints;
use crate::model::CatalogPage;

/// Why pagination stopped before the last page.
#[derive(Debug)]
pub enum Interruption {
    /// A cursor was not an absolute URL.
    InvalidCursor(libstats_client::Error),
    /// Fetching or decoding a follow-up page failed.
    Fetch(libstats_client::Error),
    /// The page cap was reached while a cursor was still present.
    PageLimit(usize),
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interruption::InvalidCursor(e) => write!(f, "invalid cursor: {}", e),
            Interruption::Fetch(e) => write!(f, "page fetch failed: {}", e),
            Interruption::PageLimit(pages) => write!(f, "stopped after {} pages", pages),
        }
    }
}

/// Result of following a catalog to its end.
#[derive(Debug)]
pub struct PaginationOutcome {
    /// Accumulated entries. `total_count` is the upstream count.
    ///
    /// When interrupted, `next_cursor` holds the cursor that was not followed.
    pub page: CatalogPage,
    /// Pages fetched, including the first.
    pub pages: usize,
    /// Set when pagination stopped early. The page is then partial.
    pub interruption: Option<Interruption>,
}

impl PaginationOutcome {
    /// Whether every page was fetched.
    pub fn is_complete(&self) -> bool {
        self.interruption.is_none()
    }
}

/// Follows catalog cursors for one filter.
pub struct Paginator<'a> {
    fetch: &'a dyn RemoteFetch,
    endpoints: &'a ServiceEndpoints,
    max_pages: usize,
}

impl<'a> Paginator<'a> {
    /// Create a paginator. `max_pages` bounds the number of pages fetched.
    pub fn new(fetch: &'a dyn RemoteFetch, endpoints: &'a ServiceEndpoints, max_pages: usize) -> Self {
        Self {
            fetch,
            endpoints,
            max_pages: max_pages.max(1),
        }
    }

    /// Fetch every catalog entry in language `code`.
    ///
    /// Fails only when the first page cannot be fetched. Later failures end
    /// pagination and are reported through [`PaginationOutcome::interruption`].
    pub async fn fetch_all_for_language(
        &self,
        code: &str,
    ) -> Result<PaginationOutcome, libstats_client::Error> {
        let url = self.endpoints.catalog_for_language(code);
        let first: CatalogPage = get_json(self.fetch, &url).await?;

        let outcome = self.follow(first).await;
        match &outcome.interruption {
            Some(interruption) => warn!(
                language = %code,
                pages = outcome.pages,
                accumulated = outcome.page.entries.len(),
                total = outcome.page.total_count,
                %interruption,
                "partial pagination"
            ),
            None => debug!(
                language = %code,
                pages = outcome.pages,
                entries = outcome.page.entries.len(),
                "pagination complete"
            ),
        }

        Ok(outcome)
    }

    /// Follow `page`'s cursors until exhausted, appending every later page.
    pub async fn follow(&self, mut page: CatalogPage) -> PaginationOutcome {
        let mut pages = 1;

        while let Some(next) = page.next_cursor.take() {
            if pages >= self.max_pages {
                page.next_cursor = Some(next);
                return PaginationOutcome {
                    page,
                    pages,
                    interruption: Some(Interruption::PageLimit(pages)),
                };
            }

            if let Err(e) = validate_url(&next) {
                page.next_cursor = Some(next);
                return PaginationOutcome {
                    page,
                    pages,
                    interruption: Some(Interruption::InvalidCursor(e)),
                };
            }

            match get_json::<CatalogPage>(self.fetch, &next).await {
                Ok(next_page) => {
                    page.entries.extend(next_page.entries);
                    page.next_cursor = next_page.next_cursor;
                    page.previous_cursor = next_page.previous_cursor;
                    pages += 1;
                }
                Err(e) => {
                    page.next_cursor = Some(next);
                    return PaginationOutcome {
                        page,
                        pages,
                        interruption: Some(Interruption::Fetch(e)),
                    };
                }
            }
        }

        PaginationOutcome {
            page,
            pages,
            interruption: None,
        }
    }
}
