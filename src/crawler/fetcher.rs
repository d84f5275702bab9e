//! HTTP fetcher implementation
//!
//! This module performs all HTTP requests for the crawl:
//! - Building the HTTP client
//! - GET requests returning the raw page body
//! - Error classification, distinguishing HTTP 403 for a more specific
//!   user-facing message
//!
//! There are no retries and no caching; a failed fetch is reported to the
//! caller once and the caller decides whether to re-prompt (seed) or drop
//! the link (one-hop fetch).

use crate::{FetchError, FetchResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds the HTTP client used for the whole run
///
/// Redirects are followed implicitly (reqwest's default policy) and both
/// http and https seeds are accepted.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("article-scout/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as a string
///
/// # Errors
///
/// * `FetchError::Forbidden` - the server answered HTTP 403
/// * `FetchError::Status` - any other non-success status
/// * `FetchError::Network` - transport failure (unreachable host, timeout,
///   malformed URL rejected by the client, body read failure)
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();

    if status == StatusCode::FORBIDDEN {
        return Err(FetchError::Forbidden {
            url: url.to_string(),
        });
    }

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })
}
