//! Two-stage scrape: results page → detail link → detail page → record.

use futures::stream::{self, StreamExt};

use crate::error::ScraperError;
use crate::fetch::PageFetcher;
use crate::locate::locate_detail_url;
use crate::record::extract_record;
use crate::types::CompanyRecord;

/// Result of scraping one URL in a batch.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub url: String,
    pub result: Result<CompanyRecord, ScraperError>,
}

/// Composes a [`PageFetcher`] with the locator and record extractor.
///
/// Holds no per-scrape state; one `Scraper` can serve any number of
/// concurrent [`Scraper::scrape`] calls.
#[derive(Debug, Clone)]
pub struct Scraper<F> {
    fetcher: F,
}

impl<F: PageFetcher> Scraper<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Scrapes the company listed on a search-results page.
    ///
    /// Fetches `results_page_url`, follows the first `a.search-result` link
    /// and extracts the record from the detail page. Any failure aborts the
    /// whole scrape; no partial record is returned.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] if the results page has no result link.
    ///   The detail page is not fetched in that case.
    /// - [`ScraperError::InvalidUrl`] if the link cannot be resolved.
    /// - Any error from [`PageFetcher::fetch`] for either page, unchanged.
    pub async fn scrape(&self, results_page_url: &str) -> Result<CompanyRecord, ScraperError> {
        let results_html = self.fetcher.fetch(results_page_url).await?;
        let detail_url = locate_detail_url(&results_html, results_page_url)?;

        tracing::info!(url = %detail_url, "scraping company data");
        let detail_html = self.fetcher.fetch(&detail_url).await?;

        Ok(extract_record(&detail_html))
    }

    /// Scrapes every URL independently with at most `max_concurrent`
    /// scrapes in flight.
    ///
    /// Outcomes are returned in input order, one per URL. A failing URL is
    /// logged and reported in its outcome without affecting the others.
    pub async fn scrape_batch<I>(&self, urls: I, max_concurrent: usize) -> Vec<ScrapeOutcome>
    where
        I: IntoIterator<Item = String>,
    {
        stream::iter(urls)
            .map(|url| async move {
                let result = self.scrape(&url).await;
                if let Err(e) = &result {
                    tracing::error!(
                        url = %url,
                        status = e.status_code(),
                        error = %e,
                        "scrape failed"
                    );
                }
                ScrapeOutcome { url, result }
            })
            .buffered(max_concurrent.max(1))
            .collect()
            .await
    }
}

/// Returns `true` if `url` points at the configured target site.
///
/// This is a plain substring check on the host marker, so
/// `"www.hithorizons.com"` matches any URL mentioning that host.
#[must_use]
pub fn is_supported_link(url: &str, site_host: &str) -> bool {
    !site_host.is_empty() && url.contains(site_host)
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
