//! Company detail page extraction.
//!
//! The detail page renders its data as a `ul.overview-data-1` list where each
//! `li` holds a `<strong>` label and a `<span>` value. Labels are matched
//! exactly (case-sensitive, no whitespace normalization beyond trimming the
//! element text). That coupling to the site's wording is fragile: a relabel
//! upstream silently empties the field.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::coordinates::extract_coordinates;
use crate::types::CompanyRecord;

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{3}").expect("valid postal code regex"));

static IFRAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("iframe").expect("valid iframe selector"));
static OVERVIEW_LIST: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul.overview-data-1").expect("valid overview selector"));
static LIST_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid li selector"));
static LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong").expect("valid label selector"));
static VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span").expect("valid value selector"));

/// A record field addressed by a detail-page label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Address,
    Year,
    Phone,
    Email,
    Website,
    ActivityCodeDescription,
    Employees,
}

impl Field {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Name" => Some(Self::Name),
            "Address" => Some(Self::Address),
            "Est. of Ownership" => Some(Self::Year),
            "Phone" => Some(Self::Phone),
            "Email" => Some(Self::Email),
            "Website" => Some(Self::Website),
            "Activity Code Description" => Some(Self::ActivityCodeDescription),
            "Employees" => Some(Self::Employees),
            _ => None,
        }
    }

    /// Writes `value` into `record`. Scalars are last-wins; phones are
    /// appended once each, skipping empty values. `postal_code` always
    /// follows the current `address`.
    fn apply(self, record: &mut CompanyRecord, value: &str) {
        match self {
            Self::Name => record.name = value.to_owned(),
            Self::Address => {
                record.address = value.to_owned();
                record.postal_code = extract_postal_code(value).unwrap_or_default().to_owned();
            }
            Self::Year => record.year = value.to_owned(),
            Self::Phone => {
                if !value.is_empty() && !record.phone.iter().any(|p| p == value) {
                    record.phone.push(value.to_owned());
                }
            }
            Self::Email => record.email = value.to_owned(),
            Self::Website => record.website = value.to_owned(),
            Self::ActivityCodeDescription => record.activity_code_description = value.to_owned(),
            Self::Employees => record.employees = value.to_owned(),
        }
    }
}

/// Returns the first `NNNN-NNN` postal code inside an address.
#[must_use]
pub fn extract_postal_code(address: &str) -> Option<&str> {
    POSTAL_CODE_RE.find(address).map(|m| m.as_str())
}

/// Extracts a [`CompanyRecord`] from a detail page.
///
/// Never fails: missing markup leaves the corresponding fields at their
/// defaults. Coordinates come from the first `iframe` anywhere in the
/// document, independent of whether the overview list exists.
#[must_use]
pub fn extract_record(detail_html: &str) -> CompanyRecord {
    let document = Html::parse_document(detail_html);
    let mut record = CompanyRecord::default();

    if let Some(iframe) = document.select(&IFRAME).next() {
        let src = iframe.value().attr("src").unwrap_or_default();
        tracing::debug!(src, "found map iframe");
        if let Some(coordinates) = extract_coordinates(src) {
            record.set_coordinates(coordinates);
        }
    }

    let Some(list) = document.select(&OVERVIEW_LIST).next() else {
        tracing::debug!("detail page has no overview list");
        return record;
    };

    for item in list.select(&LIST_ITEM) {
        let (Some(label), Some(value)) = (
            item.select(&LABEL).next(),
            item.select(&VALUE).next(),
        ) else {
            continue;
        };

        let label = element_text(label);
        match Field::from_label(&label) {
            Some(field) => field.apply(&mut record, &element_text(value)),
            None => tracing::trace!(label = %label, "ignoring unrecognised label"),
        }
    }

    record
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
