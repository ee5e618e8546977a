//! The fetch capability handed to the aggregation core.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// HTTP 200.
pub const STATUS_OK: u16 = 200;
/// HTTP 204, used by the language lookup service for unknown codes.
pub const STATUS_NO_CONTENT: u16 = 204;

/// A remote response: status code and raw body.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    /// URL that produced this response.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Bytes,
}

impl RemoteResponse {
    /// Create a response.
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the remote answered "no content".
    pub fn is_no_content(&self) -> bool {
        self.status == STATUS_NO_CONTENT
    }

    /// Turn a non-2xx response into [`Error::Status`].
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Status {
                status: self.status,
                url: self.url,
            })
        }
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Performs a single HTTP GET.
///
/// Implementations must bound every call with a timeout; a call that times out
/// returns [`Error::Timeout`].
#[async_trait]
pub trait RemoteFetch: Send + Sync {
    /// Issue a GET against `url`.
    ///
    /// Any status is returned as a response; only failures below HTTP are errors.
    async fn get(&self, url: &str) -> Result<RemoteResponse, Error>;
}

/// GET `url`, require a 2xx status and decode the body as `T`.
pub async fn get_json<T: DeserializeOwned>(
    fetch: &dyn RemoteFetch,
    url: &str,
) -> Result<T, Error> {
    fetch.get(url).await?.error_for_status()?.json()
}

/// Check that `url` is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<(), Error> {
    let parsed = reqwest::Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(()),
        _ => Err(Error::InvalidUrl(url.to_string())),
    }
}
