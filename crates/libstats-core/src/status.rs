//! Upstream health probes.

use libstats_client::RemoteFetch;
use serde::Serialize;
use tracing::warn;

use crate::config::ServiceEndpoints;

/// Status reported when a probe cannot reach its service.
pub const UNREACHABLE_STATUS: u16 = 503;

/// Language probed on the lookup service. The bare base URL answers 204.
const PROBE_LANGUAGE: &str = "en";

/// HTTP status returned by each upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpstreamStatus {
    pub catalog: u16,
    pub language: u16,
    pub population: u16,
}

/// Probe every upstream service.
pub async fn probe_upstreams(fetch: &dyn RemoteFetch, endpoints: &ServiceEndpoints) -> UpstreamStatus {
    let catalog_url = endpoints.catalog_all();
    let language_url = endpoints.countries_for_language(PROBE_LANGUAGE);
    let population_url = endpoints.population_probe();

    let (catalog, language, population) = futures::join!(
        probe(fetch, &catalog_url),
        probe(fetch, &language_url),
        probe(fetch, &population_url),
    );

    UpstreamStatus {
        catalog,
        language,
        population,
    }
}

async fn probe(fetch: &dyn RemoteFetch, url: &str) -> u16 {
    match fetch.get(url).await {
        Ok(response) => response.status,
        Err(e) => {
            warn!(url, error = %e, "upstream probe failed");
            UNREACHABLE_STATUS
        }
    }
}
