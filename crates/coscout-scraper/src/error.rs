use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no search result link found on {url}")]
    NotFound { url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ScraperError {
    /// HTTP status a caller-facing API should report for this failure.
    ///
    /// Upstream status codes pass through unchanged; transport failures
    /// surface as 503 so "site unreachable" stays distinguishable from
    /// "site structure changed" (404).
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ScraperError::HttpStatus { status, .. } => *status,
            ScraperError::Transport(_) => 503,
            ScraperError::NotFound { .. } => 404,
            ScraperError::Body { .. } | ScraperError::InvalidUrl { .. } => 500,
        }
    }
}
