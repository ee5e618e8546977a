//! reqwest-backed [`RemoteFetch`] implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::fetch::{validate_url, RemoteFetch, RemoteResponse};

/// HTTP client used in production.
///
/// Built once at startup and shared; reqwest pools connections internally.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&config.content_type)
                .map_err(|e| Error::Transport(format!("invalid content-type header: {e}")))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Transport(format!("invalid user-agent header: {e}")))?,
        );

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { inner, config })
    }

    /// Get the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl RemoteFetch for HttpClient {
    async fn get(&self, url: &str) -> Result<RemoteResponse, Error> {
        validate_url(url)?;

        let response = self.inner.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(url, status, bytes = body.len(), "remote response");

        Ok(RemoteResponse::new(url, status, body))
    }
}
