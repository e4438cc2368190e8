//! Company record scraper.
//!
//! Given a search-results page URL, [`Scraper::scrape`] locates the single
//! detail-page link, fetches that page and extracts a [`CompanyRecord`].
//! The network is reached only through the [`PageFetcher`] trait.

pub mod coordinates;
pub mod error;
pub mod fetch;
pub mod locate;
pub mod record;
pub mod scrape;
pub mod types;

pub use coordinates::extract_coordinates;
pub use error::ScraperError;
pub use fetch::{HttpFetcher, PageFetcher};
pub use locate::locate_detail_url;
pub use record::{extract_postal_code, extract_record};
pub use scrape::{is_supported_link, ScrapeOutcome, Scraper};
pub use types::{CompanyEnvelope, CompanyRecord, Coordinates};
