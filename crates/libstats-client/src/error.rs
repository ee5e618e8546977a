//! Client error types.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The URL could not be parsed as an absolute http(s) URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Connection or protocol failure below HTTP.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote answered with a status the caller cannot use.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The body was not valid JSON of the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body decoded but did not contain what the caller needs.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport(err.to_string())
        }
    }
}
