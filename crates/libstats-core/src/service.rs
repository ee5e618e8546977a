//! The library statistics service.

use std::sync::Arc;

use libstats_client::RemoteFetch;
use tracing::{info, warn};

use crate::config::{AggregationOptions, ServiceEndpoints};
use crate::error::{Error, Result};
use crate::model::{LanguageStat, ReadershipRecord};
use crate::readership::ReadershipJoiner;
use crate::stats::StatsAggregator;
use crate::status::{probe_upstreams, UpstreamStatus};
use crate::total::resolve_total_books;
use crate::validate::{is_valid_language_code, is_well_formed};

/// Entry point for statistics and readership requests.
///
/// Holds the injected fetch capability; every request borrows it.
#[derive(Clone)]
pub struct LibraryStats {
    fetch: Arc<dyn RemoteFetch>,
    endpoints: ServiceEndpoints,
    options: AggregationOptions,
}

impl LibraryStats {
    /// Create a service with default options.
    pub fn new(fetch: Arc<dyn RemoteFetch>, endpoints: ServiceEndpoints) -> Self {
        Self {
            fetch,
            endpoints,
            options: AggregationOptions::default(),
        }
    }

    /// Replace the aggregation options.
    pub fn with_options(mut self, options: AggregationOptions) -> Self {
        self.options = options;
        self
    }

    /// Upstream endpoints in use.
    pub fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    /// Aggregation options in use.
    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Statistics for a comma-separated list of language codes.
    pub async fn language_stats_for_query(&self, query: &str) -> Result<Vec<LanguageStat>> {
        self.language_stats(&parse_language_list(query)).await
    }

    /// Statistics for `codes`, in first-occurrence order.
    ///
    /// Codes that are not two letters are skipped. Languages without catalog
    /// entries, and languages whose catalog fetch failed, are omitted.
    pub async fn language_stats(&self, codes: &[String]) -> Result<Vec<LanguageStat>> {
        let usable: Vec<String> = codes
            .iter()
            .filter(|code| {
                let ok = is_well_formed(code);
                if !ok {
                    warn!(language = %code, "skipping malformed language code");
                }
                ok
            })
            .cloned()
            .collect();

        if usable.is_empty() {
            return Err(Error::InvalidInput(
                "no valid two letter language code given".to_string(),
            ));
        }

        let total_books = resolve_total_books(self.fetch.as_ref(), &self.endpoints).await?;
        let stats = StatsAggregator::new(self.fetch.as_ref(), &self.endpoints, &self.options)
            .stats_for_languages(&usable, total_books)
            .await;

        info!(
            requested = codes.len(),
            returned = stats.len(),
            total_books,
            "book count computed"
        );
        Ok(stats)
    }

    /// Readership records for `code`, capped at `limit` countries.
    pub async fn readership(
        &self,
        code: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ReadershipRecord>> {
        ReadershipJoiner::new(self.fetch.as_ref(), &self.endpoints, &self.options)
            .readership_for(code, limit)
            .await
    }

    /// Whether `code` is well formed and known to the lookup service.
    pub async fn is_valid_language_code(&self, code: &str) -> bool {
        is_valid_language_code(self.fetch.as_ref(), &self.endpoints, code).await
    }

    /// Probe every upstream service.
    pub async fn upstream_status(&self) -> UpstreamStatus {
        probe_upstreams(self.fetch.as_ref(), &self.endpoints).await
    }
}

/// Split a comma-separated language list, dropping empty segments.
pub fn parse_language_list(query: &str) -> Vec<String> {
    query
        .split(',')
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
