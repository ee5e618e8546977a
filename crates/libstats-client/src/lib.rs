//! libstats client - remote fetch capability for the library statistics service.
//!
//! The aggregation core never talks to the network directly. It is handed an
//! implementation of [`RemoteFetch`], which performs a single HTTP GET and
//! returns the status and body of the response.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use libstats_client::{get_json, ClientConfig, HttpClient, RemoteFetch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client: Arc<dyn RemoteFetch> = Arc::new(HttpClient::new(ClientConfig::default())?);
//!
//!     let countries: Vec<serde_json::Value> =
//!         get_json(client.as_ref(), "https://restcountries.com/v3.1/alpha/NOR").await?;
//!     println!("{} countries", countries.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod mock;

pub use config::ClientConfig;
pub use error::Error;
pub use fetch::{get_json, validate_url, RemoteFetch, RemoteResponse};
pub use http::HttpClient;
pub use mock::{MockFailure, MockFetcher};
