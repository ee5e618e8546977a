//! Global catalog total.

use libstats_client::{get_json, RemoteFetch};
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceEndpoints;
use crate::error::{Error, Result, Service};

#[derive(Deserialize)]
struct CatalogCount {
    count: u64,
}

/// Fetch the number of entries in the unfiltered catalog.
///
/// The catalog keeps growing, so this is fetched per request rather than cached.
pub async fn resolve_total_books(
    fetch: &dyn RemoteFetch,
    endpoints: &ServiceEndpoints,
) -> Result<u64> {
    let url = endpoints.catalog_all();
    let total: CatalogCount = get_json(fetch, &url)
        .await
        .map_err(|e| Error::unavailable(Service::Catalog, e))?;

    debug!(total = total.count, "resolved catalog total");
    Ok(total.count)
}
