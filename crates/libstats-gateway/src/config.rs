//! Gateway configuration.

use std::time::Duration;

use clap::Parser;
use libstats_client::ClientConfig;
use libstats_core::config::{
    DEFAULT_CATALOG_URL, DEFAULT_FANOUT_CONCURRENCY, DEFAULT_LANGUAGE_URL, DEFAULT_MAX_PAGES,
    DEFAULT_POPULATION_URL,
};
use libstats_core::{AggregationOptions, ServiceEndpoints};

/// Library statistics gateway command line arguments.
///
/// Every flag can also be set through the environment.
#[derive(Debug, Parser)]
#[command(name = "libstats-gateway")]
#[command(about = "HTTP/JSON gateway for book availability and readership statistics")]
#[command(version)]
pub struct Args {
    /// Address to bind to.
    #[arg(long, env = "LIBSTATS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on for HTTP requests.
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the book catalog.
    #[arg(long, env = "LIBSTATS_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Base URL of the language-to-countries lookup.
    #[arg(long, env = "LIBSTATS_LANGUAGE_URL", default_value = DEFAULT_LANGUAGE_URL)]
    pub language_url: String,

    /// Base URL of the country population service.
    #[arg(long, env = "LIBSTATS_POPULATION_URL", default_value = DEFAULT_POPULATION_URL)]
    pub population_url: String,

    /// Timeout (ms) for every upstream request.
    #[arg(long, env = "LIBSTATS_CLIENT_TIMEOUT_MS", default_value_t = 3_000)]
    pub client_timeout_ms: u64,

    /// Upstream requests in flight per fan-out (1 = sequential).
    #[arg(long, env = "LIBSTATS_FANOUT_CONCURRENCY", default_value_t = DEFAULT_FANOUT_CONCURRENCY)]
    pub fanout_concurrency: usize,

    /// Catalog pages followed per language before giving up.
    #[arg(long, env = "LIBSTATS_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Reject readership codes the lookup service does not know.
    #[arg(long, env = "LIBSTATS_VERIFY_LANGUAGE_CODES", default_value_t = false)]
    pub verify_language_codes: bool,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Upstream base URLs.
    pub endpoints: ServiceEndpoints,
    /// Timeout for every upstream request.
    pub client_timeout: Duration,
    /// Upstream requests in flight per fan-out.
    pub fanout_concurrency: usize,
    /// Catalog pages followed per language.
    pub max_pages: usize,
    /// Probe the lookup service before answering readership requests.
    pub verify_language_codes: bool,
}

impl GatewayConfig {
    /// Upstream client configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new().with_timeout(self.client_timeout)
    }

    /// Aggregation options.
    pub fn aggregation_options(&self) -> AggregationOptions {
        AggregationOptions::new()
            .with_fanout_concurrency(self.fanout_concurrency)
            .with_max_pages(self.max_pages)
            .with_verify_language_codes(self.verify_language_codes)
    }
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: format!("{}:{}", args.host, args.port),
            endpoints: ServiceEndpoints::new(
                args.catalog_url.clone(),
                args.language_url.clone(),
                args.population_url.clone(),
            ),
            client_timeout: Duration::from_millis(args.client_timeout_ms),
            fanout_concurrency: args.fanout_concurrency,
            max_pages: args.max_pages,
            verify_language_codes: args.verify_language_codes,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            endpoints: ServiceEndpoints::default(),
            client_timeout: Duration::from_secs(3),
            fanout_concurrency: DEFAULT_FANOUT_CONCURRENCY,
            max_pages: DEFAULT_MAX_PAGES,
            verify_language_codes: false,
        }
    }
}
