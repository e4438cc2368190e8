//! Latitude/longitude extraction from an embedded map URL.
//!
//! Detail pages embed a map iframe whose `src` carries the company location
//! as `q=<lat>%2c+<lng>`. Values are passed through as raw strings with no
//! numeric validation.

use crate::types::Coordinates;

const QUERY_MARKER: &str = "q=";
const PAIR_DELIMITER: &str = "%2c+";

/// Extracts the coordinate pair from an iframe `src`.
///
/// Returns `None` when the URL has no `q=` parameter, which is normal for
/// pages without a map, and also when the value does not contain the
/// `%2c+` delimiter. The value ends at the next `&`, so trailing query
/// parameters never leak into the longitude. Anything after a second
/// delimiter is ignored.
#[must_use]
pub fn extract_coordinates(iframe_src: &str) -> Option<Coordinates> {
    let (_, after_marker) = iframe_src.split_once(QUERY_MARKER)?;
    let value = after_marker
        .split_once('&')
        .map_or(after_marker, |(value, _)| value);
    tracing::debug!(iframe_src, value, "map query value");

    let mut parts = value.split(PAIR_DELIMITER);
    let (Some(latitude), Some(longitude)) = (parts.next(), parts.next()) else {
        tracing::warn!(iframe_src, "map query value is not a coordinate pair");
        return None;
    };

    tracing::debug!(latitude, longitude, "coordinates extracted");
    Some(Coordinates {
        latitude: latitude.to_owned(),
        longitude: longitude.to_owned(),
    })
}
