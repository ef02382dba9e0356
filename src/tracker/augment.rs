//! Derived map-link field.

use super::fields::Field;
use super::record::NormalizedRecord;

pub const MAPS_BASE_URL: &str = "http://maps.google.com/maps";

/// Map link for a coordinate pair
pub fn google_maps_url(latitude: &str, longitude: &str) -> String {
    format!("{}?z=12&t=m&q=loc:{}+{}", MAPS_BASE_URL, latitude, longitude)
}

/// Add `googlemapsurl` when the record has both coordinates.
///
/// Blank coordinate cells count as missing.
pub fn augment(record: NormalizedRecord) -> NormalizedRecord {
    let coordinate = |field: Field| record.get(field).filter(|v| !v.is_empty());
    let url = match (coordinate(Field::Latitude), coordinate(Field::Longitude)) {
        (Some(lat), Some(lon)) => google_maps_url(lat, lon),
        _ => return record,
    };
    record.with_field(Field::GoogleMapsUrl, url)
}
