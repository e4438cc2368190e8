//! `scrape` command: batch-scrape search-results URLs and print JSON lines.
//!
//! Per-URL failures are logged by the scraper and skipped so one bad link
//! does not abort the run.

use std::io::Write;

use coscout_core::AppConfig;
use coscout_scraper::{is_supported_link, CompanyEnvelope, HttpFetcher, Scraper};
use serde::Serialize;

/// One stdout line per successfully scraped URL.
#[derive(Debug, Serialize)]
struct ScrapedLine<'a> {
    url: &'a str,
    #[serde(flatten)]
    envelope: CompanyEnvelope,
}

/// Splits `links` into those on the configured site and those to skip,
/// preserving order within each group.
pub(crate) fn partition_links(links: Vec<String>, site_host: &str) -> (Vec<String>, Vec<String>) {
    links
        .into_iter()
        .partition(|link| is_supported_link(link, site_host))
}

/// Scrapes every supported link and writes one JSON object per success.
///
/// # Errors
///
/// Returns an error if no link points at the configured site, the HTTP
/// client cannot be built, stdout cannot be written, or every scrape failed.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    links: Vec<String>,
    concurrency: Option<usize>,
) -> anyhow::Result<()> {
    let (supported, skipped) = partition_links(links, &config.site_host);
    for link in &skipped {
        tracing::warn!(
            url = %link,
            site_host = %config.site_host,
            "skipping link for unsupported site"
        );
    }
    if supported.is_empty() {
        anyhow::bail!("no links point at {}", config.site_host);
    }

    let fetcher = HttpFetcher::new(config.request_timeout_secs, &config.user_agent)?;
    let scraper = Scraper::new(fetcher);
    let max_concurrent = concurrency.unwrap_or(config.max_concurrent_scrapes).max(1);
    let total = supported.len();

    let outcomes = scraper.scrape_batch(supported, max_concurrent).await;

    let mut stdout = std::io::stdout().lock();
    let mut succeeded = 0usize;
    for outcome in outcomes {
        let Ok(record) = outcome.result else {
            continue;
        };
        let line = ScrapedLine {
            url: &outcome.url,
            envelope: CompanyEnvelope {
                company_data: record,
            },
        };
        writeln!(stdout, "{}", serde_json::to_string(&line)?)?;
        succeeded += 1;
    }

    tracing::info!(
        succeeded,
        failed = total - succeeded,
        skipped = skipped.len(),
        "scrape run complete"
    );

    if succeeded == 0 {
        anyhow::bail!("all {total} scrapes failed");
    }
    Ok(())
}
