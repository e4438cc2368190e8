//! Finds the detail-page link on a search-results page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ScraperError;

static RESULT_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.search-result").expect("valid result link selector"));

/// Returns the absolute URL of the first `a.search-result` anchor in
/// `results_html`, resolved against `base_url`.
///
/// Only the first matching anchor is considered; a results page is expected
/// to list a single company. Relative, protocol-relative and absolute hrefs
/// are all resolved the way a browser would.
///
/// # Errors
///
/// - [`ScraperError::NotFound`] if there is no matching anchor, or the first
///   one has a missing or blank `href`.
/// - [`ScraperError::InvalidUrl`] if `base_url` is not an absolute URL or the
///   href cannot be joined onto it.
pub fn locate_detail_url(results_html: &str, base_url: &str) -> Result<String, ScraperError> {
    let document = Html::parse_document(results_html);

    let href = document
        .select(&RESULT_LINK)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.trim().is_empty());

    let Some(href) = href else {
        tracing::warn!(url = base_url, "no search result link found");
        return Err(ScraperError::NotFound {
            url: base_url.to_owned(),
        });
    };

    resolve_href(base_url, href)
}

fn resolve_href(base_url: &str, href: &str) -> Result<String, ScraperError> {
    let base = reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    base.join(href)
        .map(String::from)
        .map_err(|e| ScraperError::InvalidUrl {
            url: href.to_owned(),
            reason: format!("cannot resolve against {base_url}: {e}"),
        })
}
