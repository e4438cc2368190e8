//! Page fetching: the single network capability the scraper depends on.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Retrieves the raw HTML of a page.
///
/// Implementations make exactly one attempt per call. Callers that want
/// retries wrap the [`crate::Scraper`] rather than the fetcher.
pub trait PageFetcher {
    /// Returns the body of `url` as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Transport`] for connection, DNS, TLS or timeout failures.
    /// - [`ScraperError::HttpStatus`] for any non-2xx final status.
    /// - [`ScraperError::Body`] when the body cannot be read.
    /// - [`ScraperError::InvalidUrl`] when `url` cannot be turned into a request.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// [`PageFetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates an `HttpFetcher` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching page");

        let response = match self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) if err.is_builder() => {
                tracing::error!(url, error = %err, "could not build request");
                return Err(ScraperError::InvalidUrl {
                    url: url.to_owned(),
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                tracing::error!(url, error = %err, "request error");
                return Err(ScraperError::Transport(err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), "HTTP error");
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await.map_err(|source| {
            tracing::error!(url, error = %source, "failed to read response body");
            ScraperError::Body {
                url: url.to_owned(),
                source,
            }
        })?;

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
        Ok(body)
    }
}
