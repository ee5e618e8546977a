//! Upstream endpoints and aggregation options.

/// Default catalog base URL.
pub const DEFAULT_CATALOG_URL: &str = "https://gutendex.com/books/";

/// Default language-to-countries lookup base URL.
pub const DEFAULT_LANGUAGE_URL: &str = "http://129.241.150.113:3000/language2countries/";

/// Default population service base URL.
pub const DEFAULT_POPULATION_URL: &str = "https://restcountries.com/v3.1";

/// Default number of remote calls in flight per request.
pub const DEFAULT_FANOUT_CONCURRENCY: usize = 4;

/// Default cap on catalog pages followed for one language.
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Base URLs of the three upstream services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// Catalog base, queried as `<catalog>?languages=<code>`.
    pub catalog: String,
    /// Lookup base, queried as `<language>/<code>`.
    pub language: String,
    /// Population base, queried as `<population>/alpha/<alpha3>`.
    pub population: String,
}

impl ServiceEndpoints {
    /// Create endpoints from three base URLs.
    pub fn new(
        catalog: impl Into<String>,
        language: impl Into<String>,
        population: impl Into<String>,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            language: language.into(),
            population: population.into(),
        }
    }

    /// Unfiltered catalog.
    pub fn catalog_all(&self) -> String {
        self.catalog.clone()
    }

    /// Catalog filtered to one language.
    pub fn catalog_for_language(&self, code: &str) -> String {
        format!("{}?languages={}", self.catalog, code)
    }

    /// Countries where `code` is an official language.
    pub fn countries_for_language(&self, code: &str) -> String {
        format!("{}/{}", self.language.trim_end_matches('/'), code)
    }

    /// Population of the country with alpha-3 code `alpha3`.
    pub fn population_for(&self, alpha3: &str) -> String {
        format!("{}/alpha/{}", self.population.trim_end_matches('/'), alpha3)
    }

    /// URL probed to report the population service's health.
    pub fn population_probe(&self) -> String {
        format!("{}/all", self.population.trim_end_matches('/'))
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATALOG_URL,
            DEFAULT_LANGUAGE_URL,
            DEFAULT_POPULATION_URL,
        )
    }
}

/// Tuning for one aggregation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Remote calls in flight per fan-out. 1 means strictly sequential.
    pub fanout_concurrency: usize,
    /// Pages followed per language before pagination is cut off.
    pub max_pages: usize,
    /// Probe the lookup service before answering a readership request.
    pub verify_language_codes: bool,
}

impl AggregationOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self {
            fanout_concurrency: DEFAULT_FANOUT_CONCURRENCY,
            max_pages: DEFAULT_MAX_PAGES,
            verify_language_codes: false,
        }
    }

    /// Set the fan-out concurrency (clamped to at least 1).
    pub fn with_fanout_concurrency(mut self, concurrency: usize) -> Self {
        self.fanout_concurrency = concurrency.max(1);
        self
    }

    /// Set the page cap (clamped to at least 1).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Enable or disable the existence probe for readership codes.
    pub fn with_verify_language_codes(mut self, verify: bool) -> Self {
        self.verify_language_codes = verify;
        self
    }
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self::new()
    }
}
