//! Language code validation.

use libstats_client::fetch::{STATUS_NO_CONTENT, STATUS_OK};
use libstats_client::RemoteFetch;
use tracing::{debug, warn};

use crate::config::ServiceEndpoints;

/// Whether `code` is exactly two ASCII letters.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Ask the lookup service whether it knows `code`.
///
/// Only a 200 counts as known; "no content" and any other status are unknown.
/// A transport failure is returned as an error.
pub async fn lookup_language(
    fetch: &dyn RemoteFetch,
    endpoints: &ServiceEndpoints,
    code: &str,
) -> Result<bool, libstats_client::Error> {
    let url = endpoints.countries_for_language(code);
    let response = fetch.get(&url).await?;
    match response.status {
        STATUS_OK => Ok(true),
        STATUS_NO_CONTENT => {
            debug!(language = %code, "language unknown to lookup service");
            Ok(false)
        }
        status => {
            warn!(language = %code, status, "unexpected lookup status");
            Ok(false)
        }
    }
}

/// Like [`lookup_language`], with transport failures counted as unknown.
pub async fn is_known_language(
    fetch: &dyn RemoteFetch,
    endpoints: &ServiceEndpoints,
    code: &str,
) -> bool {
    match lookup_language(fetch, endpoints, code).await {
        Ok(known) => known,
        Err(e) => {
            warn!(language = %code, error = %e, "language lookup failed");
            false
        }
    }
}

/// Whether `code` is well formed and known to the lookup service.
pub async fn is_valid_language_code(
    fetch: &dyn RemoteFetch,
    endpoints: &ServiceEndpoints,
    code: &str,
) -> bool {
    is_well_formed(code) && is_known_language(fetch, endpoints, code).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use libstats_client::{MockFailure, MockFetcher};
    use serde_json::json;

    fn endpoints() -> ServiceEndpoints {
        ServiceEndpoints::new("http://catalog.test/", "http://lookup.test/language2countries/", "http://population.test")
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed("en"));
        assert!(is_well_formed("NO"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("e"));
        assert!(!is_well_formed("eng"));
        assert!(!is_well_formed("e1"));
        assert!(!is_well_formed("  "));
        assert!(!is_well_formed("e-"));
        assert!(!is_well_formed("æø"));
        assert!(!is_well_formed("æ"));
    }

    #[tokio::test]
    async fn test_malformed_codes_make_no_calls() {
        let fetcher = MockFetcher::new();
        for code in ["e", "eng", "", "æø"] {
            assert!(!is_valid_language_code(&fetcher, &endpoints(), code).await);
        }
        assert_eq!(fetcher.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_probe_outcomes() {
        let fetcher = MockFetcher::new()
            .with_json("http://lookup.test/language2countries/en", &json!([{"ISO3166_1_Alpha_3": "GBR"}]))
            .with_status("http://lookup.test/language2countries/qq", 204, "")
            .with_status("http://lookup.test/language2countries/zz", 500, "boom")
            .with_failure("http://lookup.test/language2countries/xx", MockFailure::Timeout);
        let endpoints = endpoints();

        assert!(is_valid_language_code(&fetcher, &endpoints, "en").await);
        assert!(!is_valid_language_code(&fetcher, &endpoints, "qq").await);
        assert!(!is_valid_language_code(&fetcher, &endpoints, "zz").await);
        assert!(!is_valid_language_code(&fetcher, &endpoints, "xx").await);
    }

    #[tokio::test]
    async fn test_lookup_reports_transport_failure() {
        let fetcher = MockFetcher::new()
            .with_status("http://lookup.test/language2countries/qq", 204, "")
            .with_failure("http://lookup.test/language2countries/xx", MockFailure::Transport("connection refused".to_string()));
        let endpoints = endpoints();

        assert!(!lookup_language(&fetcher, &endpoints, "qq").await.unwrap());
        assert!(lookup_language(&fetcher, &endpoints, "xx").await.is_err());
    }
}
