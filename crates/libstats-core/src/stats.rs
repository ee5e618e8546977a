//! Per-language catalog statistics.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use libstats_client::RemoteFetch;
use tracing::{debug, warn};

use crate::authors::count_unique_authors;
use crate::config::{AggregationOptions, ServiceEndpoints};
use crate::model::LanguageStat;
use crate::paginator::Paginator;

/// Scale used to keep 5 decimal places.
const FRACTION_SCALE: f64 = 100_000.0;

/// Truncate `value` to 5 decimal places. Never rounds up.
pub fn truncate5(value: f64) -> f64 {
    (value * FRACTION_SCALE).trunc() / FRACTION_SCALE
}

/// Share of `total` made up by `books`, truncated to 5 decimals and kept in [0, 1].
pub fn fraction_of(books: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    truncate5((books as f64 / total as f64).min(1.0))
}

/// Remove repeated codes, keeping the first occurrence of each.
///
/// Comparison is exact and case-sensitive.
pub fn dedupe_codes(codes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    codes
        .iter()
        .filter(|&code| seen.insert(code.as_str()))
        .cloned()
        .collect()
}

/// Book and author totals for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageTally {
    pub books: u64,
    pub authors: u64,
}

/// Drives the paginator and deduplicator for each requested language.
pub struct StatsAggregator<'a> {
    fetch: &'a dyn RemoteFetch,
    endpoints: &'a ServiceEndpoints,
    options: &'a AggregationOptions,
}

impl<'a> StatsAggregator<'a> {
    /// Create an aggregator.
    pub fn new(
        fetch: &'a dyn RemoteFetch,
        endpoints: &'a ServiceEndpoints,
        options: &'a AggregationOptions,
    ) -> Self {
        Self {
            fetch,
            endpoints,
            options,
        }
    }

    /// Count books and unique authors in language `code`.
    ///
    /// Returns `None` when the first catalog page could not be fetched. A partial
    /// pagination still yields a tally computed from what was accumulated.
    pub async fn tally(&self, code: &str) -> Option<LanguageTally> {
        let paginator = Paginator::new(self.fetch, self.endpoints, self.options.max_pages);

        let outcome = match paginator.fetch_all_for_language(code).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(language = %code, error = %e, "catalog fetch failed");
                return None;
            }
        };

        let books = outcome.page.total_count;
        if books == 0 {
            return Some(LanguageTally::default());
        }

        let authors = count_unique_authors(&outcome.page.entries) as u64;
        Some(LanguageTally { books, authors })
    }

    /// Statistics for one language against a catalog of `total_books`.
    ///
    /// Failures produce a zero stat.
    pub async fn stat_for(&self, code: &str, total_books: u64) -> LanguageStat {
        match self.tally(code).await {
            Some(tally) if tally.books > 0 => LanguageStat {
                language: code.to_string(),
                books: tally.books,
                authors: tally.authors,
                fraction: fraction_of(tally.books, total_books),
            },
            _ => LanguageStat::zero(code),
        }
    }

    /// Statistics for every distinct code in `codes`, in first-occurrence order.
    ///
    /// Languages that matched nothing, or whose catalog fetch failed, are left out.
    pub async fn stats_for_languages(&self, codes: &[String], total_books: u64) -> Vec<LanguageStat> {
        let codes = dedupe_codes(codes);

        let stats: Vec<LanguageStat> = stream::iter(codes)
            .map(|code| async move { self.stat_for(&code, total_books).await })
            .buffered(self.options.fanout_concurrency.max(1))
            .collect()
            .await;

        let requested = stats.len();
        let stats: Vec<LanguageStat> = stats.into_iter().filter(|s| !s.is_empty()).collect();
        debug!(requested, returned = stats.len(), total_books, "language stats computed");

        stats
    }
}
