//! JSON response types for the HTTP gateway.
//!
//! Statistics and readership answers are serialized straight from the core's
//! `LanguageStat` and `ReadershipRecord`.

use serde::{Deserialize, Serialize};

use libstats_core::UpstreamStatus;

/// API version reported by the status endpoint and used in paths.
pub const API_VERSION: &str = "v1";

/// Status response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// HTTP status of the catalog service.
    pub gutendexapi: u16,
    /// HTTP status of the language lookup service.
    pub languageapi: u16,
    /// HTTP status of the population service.
    pub countriesapi: u16,
    /// API version.
    pub version: String,
    /// Seconds since the gateway started.
    pub uptime: f64,
}

impl StatusResponse {
    /// Build a status response from upstream probes and uptime.
    pub fn new(upstreams: UpstreamStatus, uptime_secs: f64) -> Self {
        Self {
            gutendexapi: upstreams.catalog,
            languageapi: upstreams.language,
            countriesapi: upstreams.population,
            version: API_VERSION.to_string(),
            uptime: uptime_secs.round(),
        }
    }
}
