//! HTTP route handlers.

pub mod bookcount;
pub mod index;
pub mod readership;
pub mod status;

/// Root of every statistics path.
pub const LIBRARY_STATS_PATH: &str = "/librarystats/v1";
/// Book count per language.
pub const BOOK_COUNT_PATH: &str = "/librarystats/v1/bookcount/";
/// Readership per country.
pub const READERSHIP_PATH: &str = "/librarystats/v1/readership/";
/// Upstream status.
pub const STATUS_PATH: &str = "/librarystats/v1/status/";
