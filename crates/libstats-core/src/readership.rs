//! Readership join: language → official countries → populations.

use futures::stream::{self, StreamExt, TryStreamExt};
use libstats_client::{get_json, RemoteFetch};
use tracing::{debug, info};

use crate::config::{AggregationOptions, ServiceEndpoints};
use crate::error::{Error, Result, Service};
use crate::model::{CountryInfo, PopulationRecord, ReadershipRecord};
use crate::stats::{LanguageTally, StatsAggregator};
use crate::validate::{is_well_formed, lookup_language};

/// Joins a language's catalog totals with the population of every country
/// where it is official.
pub struct ReadershipJoiner<'a> {
    fetch: &'a dyn RemoteFetch,
    endpoints: &'a ServiceEndpoints,
    options: &'a AggregationOptions,
}

impl<'a> ReadershipJoiner<'a> {
    /// Create a joiner.
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

    /// One readership record per country where `code` is official.
    ///
    /// `limit` caps the number of countries processed; `None` or `Some(0)` means
    /// no cap. Countries keep the order the lookup service returned them in.
    pub async fn readership_for(
        &self,
        code: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ReadershipRecord>> {
        if !is_well_formed(code) {
            return Err(Error::InvalidInput(format!(
                "'{}' is not a two letter language code",
                code
            )));
        }

        if self.options.verify_language_codes {
            let known = lookup_language(self.fetch, self.endpoints, code)
                .await
                .map_err(|e| Error::unavailable(Service::LanguageLookup, e))?;
            if !known {
                return Err(Error::InvalidInput(format!("unknown language code '{}'", code)));
            }
        }

        let tally = StatsAggregator::new(self.fetch, self.endpoints, self.options)
            .tally(code)
            .await
            .unwrap_or_default();

        let countries = self.countries_for_language(code).await?;
        if countries.is_empty() {
            return Err(Error::NotFound(format!(
                "no countries found with language '{}'",
                code
            )));
        }

        let records = self.join(&countries, tally, limit).await?;
        info!(
            language = %code,
            countries = countries.len(),
            records = records.len(),
            books = tally.books,
            authors = tally.authors,
            "readership computed"
        );

        Ok(records)
    }

    /// Countries where `code` is an official language.
    ///
    /// "No content" yields an empty list.
    pub async fn countries_for_language(&self, code: &str) -> Result<Vec<CountryInfo>> {
        let url = self.endpoints.countries_for_language(code);
        let response = self
            .fetch
            .get(&url)
            .await
            .map_err(|e| Error::unavailable(Service::LanguageLookup, e))?;

        if response.is_no_content() {
            debug!(language = %code, "lookup returned no content");
            return Ok(Vec::new());
        }

        response
            .error_for_status()
            .and_then(|r| r.json::<Vec<CountryInfo>>())
            .map_err(|e| Error::unavailable(Service::LanguageLookup, e))
    }

    /// Population of `country`, from the first record returned for its alpha-3 code.
    pub async fn population_of(&self, country: &CountryInfo) -> Result<u64> {
        let url = self.endpoints.population_for(&country.alpha3);
        let records: Vec<PopulationRecord> = get_json(self.fetch, &url)
            .await
            .map_err(|e| Error::unavailable(Service::Population, e))?;

        records.first().map(|r| r.population).ok_or_else(|| {
            Error::unavailable(
                Service::Population,
                libstats_client::Error::UnexpectedPayload(format!(
                    "no population record for {}",
                    country.alpha3
                )),
            )
        })
    }

    /// Build readership records for the first `limit` countries.
    ///
    /// The first failing population lookup fails the whole join.
    pub async fn join(
        &self,
        countries: &[CountryInfo],
        tally: LanguageTally,
        limit: Option<usize>,
    ) -> Result<Vec<ReadershipRecord>> {
        let take = match limit {
            Some(n) if n > 0 => n,
            _ => countries.len(),
        };

        stream::iter(countries.iter().take(take).cloned())
            .map(|country| async move {
                let readership = self.population_of(&country).await?;
                Ok::<_, Error>(ReadershipRecord {
                    country: country.official_name,
                    isocode: country.alpha2,
                    books: tally.books,
                    authors: tally.authors,
                    readership,
                })
            })
            .buffered(self.options.fanout_concurrency.max(1))
            .try_collect()
            .await
    }
}
