//! Record types produced by the company scraper.
//!
//! Every field of [`CompanyRecord`] defaults to an empty string (or an empty
//! list for `phone`), so a detail page with missing markup still yields a
//! complete record. Numeric-looking values (`year`, `employees`, coordinates)
//! are kept as the site renders them: employee counts appear as ranges such
//! as `"50-100"` and must not be parsed.

use serde::{Deserialize, Serialize};

/// A normalized company record extracted from a detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub address: String,
    /// `NNNN-NNN` postal code found inside `address`, or empty.
    pub postal_code: String,
    /// Distinct non-empty phone numbers in document order.
    pub phone: Vec<String>,
    pub email: String,
    pub website: String,
    pub activity_code_description: String,
    /// Year the current ownership was established, verbatim.
    pub year: String,
    pub employees: String,
    pub latitude: String,
    pub longitude: String,
}

impl CompanyRecord {
    /// Copies a coordinate pair into the record.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.latitude = coordinates.latitude;
        self.longitude = coordinates.longitude;
    }
}

/// Latitude/longitude pair taken from an embedded map URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// Wire envelope used when a record is reported to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyEnvelope {
    pub company_data: CompanyRecord,
}
