//! Aggregation errors.

use std::fmt;

use thiserror::Error;

/// Remote service a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Paginated book catalog.
    Catalog,
    /// Language-to-countries lookup.
    LanguageLookup,
    /// Country population.
    Population,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Catalog => write!(f, "catalog"),
            Service::LanguageLookup => write!(f, "language lookup"),
            Service::Population => write!(f, "population"),
        }
    }
}

/// Errors surfaced by the statistics and readership operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed request input. No remote call was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required remote call failed.
    #[error("{service} service unavailable: {source}")]
    ServiceUnavailable {
        /// Which remote failed.
        service: Service,
        /// Underlying client failure.
        #[source]
        source: libstats_client::Error,
    },

    /// The language is not official anywhere.
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Wrap a client failure from `service`.
    pub fn unavailable(service: Service, source: libstats_client::Error) -> Self {
        Error::ServiceUnavailable { service, source }
    }
}

/// Result alias for aggregation operations.
pub type Result<T> = std::result::Result<T, Error>;
