//! Mock fetcher for testing
//!
//! Serves scripted responses from memory so the aggregation pipeline can be
//! exercised without real network connections. Every requested URL is recorded.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use libstats_client::{MockFailure, MockFetcher, RemoteFetch};
//!
//! let fetcher = MockFetcher::new()
//!     .with_json("http://lookup.test/no", &serde_json::json!([{"ISO3166_1_Alpha_3": "NOR"}]))
//!     .with_failure("http://population.test/alpha/NOR", MockFailure::Timeout);
//!
//! let response = fetcher.get("http://lookup.test/no").await.unwrap();
//! assert_eq!(response.status, 200);
//! assert_eq!(fetcher.call_count("http://lookup.test/no"), 1);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::Error;
use crate::fetch::{RemoteFetch, RemoteResponse};

/// Failure a mock route produces instead of a response.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Behave as if the request timed out.
    Timeout,
    /// Behave as if the connection failed.
    Transport(String),
}

impl From<&MockFailure> for Error {
    fn from(failure: &MockFailure) -> Self {
        match failure {
            MockFailure::Timeout => Error::Timeout,
            MockFailure::Transport(msg) => Error::Transport(msg.clone()),
        }
    }
}

#[derive(Debug, Clone)]
enum MockRoute {
    Respond { status: u16, body: Vec<u8> },
    Fail(MockFailure),
}

/// In-memory [`RemoteFetch`].
///
/// URLs without a scripted route answer 404 with an empty body.
#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: HashMap<String, MockRoute>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a mock with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with 200 and `body` serialized as JSON.
    pub fn with_json<T: Serialize + ?Sized>(self, url: impl Into<String>, body: &T) -> Self {
        let body = serde_json::to_vec(body).unwrap_or_default();
        self.with_status(url, 200, body)
    }

    /// Answer `url` with an arbitrary status and raw body.
    pub fn with_status(
        mut self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.routes.insert(
            url.into(),
            MockRoute::Respond {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Fail every request to `url`.
    pub fn with_failure(mut self, url: impl Into<String>, failure: MockFailure) -> Self {
        self.routes.insert(url.into(), MockRoute::Fail(failure));
        self
    }

    /// All URLs requested so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of times `url` was requested.
    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().iter().filter(|u| u.as_str() == url).count()
    }

    /// Total number of requests served.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RemoteFetch for MockFetcher {
    async fn get(&self, url: &str) -> Result<RemoteResponse, Error> {
        self.calls.lock().push(url.to_string());

        match self.routes.get(url) {
            Some(MockRoute::Respond { status, body }) => {
                Ok(RemoteResponse::new(url, *status, body.clone()))
            }
            Some(MockRoute::Fail(failure)) => Err(failure.into()),
            None => Ok(RemoteResponse::new(url, 404, Vec::new())),
        }
    }
}
