//! libstats core - cross-source aggregation for book availability and readership.
//!
//! Three upstream services are combined:
//!
//! - a paginated **catalog** of books, filterable by language;
//! - a **language lookup** mapping a language code to the countries where it is
//!   official;
//! - a **population** service keyed by alpha-3 country code.
//!
//! From them the crate derives per-language statistics (books, unique authors,
//! share of the whole catalog) and per-country readership estimates.
//!
//! All network access goes through an injected [`libstats_client::RemoteFetch`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use libstats_client::{ClientConfig, HttpClient};
//! use libstats_core::{LibraryStats, ServiceEndpoints};
//!
//! let client = HttpClient::new(ClientConfig::default())?;
//! let service = LibraryStats::new(Arc::new(client), ServiceEndpoints::default());
//!
//! let stats = service.language_stats_for_query("no,fi").await?;
//! let readers = service.readership("no", Some(5)).await?;
//! ```

pub mod authors;
pub mod config;
pub mod error;
pub mod model;
pub mod paginator;
pub mod readership;
pub mod service;
pub mod stats;
pub mod status;
pub mod total;
pub mod validate;

pub use authors::count_unique_authors;
pub use config::{AggregationOptions, ServiceEndpoints};
pub use error::{Error, Result, Service};
pub use model::{
    AuthorRef, CatalogEntry, CatalogPage, CountryInfo, LanguageStat, PopulationRecord,
    ReadershipRecord,
};
pub use paginator::{Interruption, PaginationOutcome, Paginator};
pub use readership::ReadershipJoiner;
pub use service::{parse_language_list, LibraryStats};
pub use stats::{dedupe_codes, truncate5, LanguageTally, StatsAggregator};
pub use status::UpstreamStatus;
pub use validate::{is_valid_language_code, is_well_formed, lookup_language};
