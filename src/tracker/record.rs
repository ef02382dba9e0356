//! # Records and Key Normalization
//!
//! Upstream rows arrive as flat maps keyed by the dataset's column headers
//! (`"Fire Prevention Districts"`, `"Applicant"`, ...). Everything past this
//! module addresses fields through their canonical key: lower-case with all
//! whitespace removed.

use std::collections::BTreeMap;

use super::fields::Field;

/// One upstream row: upstream column name to string value
pub type RawRecord = BTreeMap<String, String>;

/// Canonicalize a single key
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A record whose keys are all canonical.
///
/// Only constructible through [`normalize`], so holding one means the
/// casing invariant holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: BTreeMap<String, String>,
}

impl NormalizedRecord {
    /// Value of a recognized field. Empty cells are present with `""`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.get_key(field.as_str())
    }

    /// Value under an arbitrary key; the key is normalized first
    pub fn get_key(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&normalize_key(key))
            .map(String::as_str)
    }

    /// Returns a copy carrying `value` under `field`
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields.insert(field.as_str().to_string(), value.into());
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Run the normalizer over an already normalized record
    pub fn renormalize(&self) -> NormalizedRecord {
        normalize(&self.fields)
    }
}

/// Canonicalize every key of a record.
///
/// When two raw keys collapse to the same canonical key, the one that sorts
/// last wins.
pub fn normalize(raw: &RawRecord) -> NormalizedRecord {
    let fields = raw
        .iter()
        .map(|(key, value)| (normalize_key(key), value.clone()))
        .collect();
    NormalizedRecord { fields }
}

/// Canonicalize a sequence of records, preserving order and count
pub fn normalize_all(raw: &[RawRecord]) -> Vec<NormalizedRecord> {
    raw.iter().map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Fire Prevention Districts"), "firepreventiondistricts");
        assert_eq!(normalize_key("locationid"), "locationid");
        assert_eq!(normalize_key("Zip\tCodes "), "zipcodes");
        assert_eq!(normalize_key("Café Größe"), "cafégröße");
    }

    #[test]
    fn test_normalize_record() {
        let record = normalize(&raw(&[
            ("Applicant", "Bay Area Mobile Catering"),
            ("Facility Type", "Truck"),
            ("locationid", "1735061"),
        ]));

        assert_eq!(record.get(Field::Applicant), Some("Bay Area Mobile Catering"));
        assert_eq!(record.get(Field::FacilityType), Some("Truck"));
        assert_eq!(record.get(Field::LocationId), Some("1735061"));
        assert_eq!(record.get_key("FacilityType"), Some("Truck"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let record = normalize(&raw(&[
            ("Location Description", "MARKET ST"),
            ("X", "6010000"),
            ("Days Hours", "Mo-Fr:7AM-3PM"),
        ]));

        assert_eq!(record.renormalize(), record);
    }

    #[test]
    fn test_normalize_all_preserves_order_and_count() {
        let rows = vec![
            raw(&[("Applicant", "Zeta")]),
            raw(&[("Applicant", "Alpha")]),
            raw(&[("Applicant", "Mu")]),
        ];

        let normalized = normalize_all(&rows);
        let names: Vec<_> = normalized
            .iter()
            .map(|r| r.get(Field::Applicant).unwrap())
            .collect();

        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let row = raw(&[("Status", "APPROVED")]);
        let before = row.clone();
        let _ = normalize(&row);
        assert_eq!(row, before);
    }

    #[test]
    fn test_with_field_returns_extended_copy() {
        let record = normalize(&raw(&[("Applicant", "A")]));
        let extended = record.clone().with_field(Field::Status, "REQUESTED");

        assert_eq!(record.get(Field::Status), None);
        assert_eq!(extended.get(Field::Status), Some("REQUESTED"));
    }

    #[test]
    fn test_empty_values_are_present() {
        let record = normalize(&raw(&[("Applicant", "A"), ("dayshours", "")]));

        assert_eq!(record.get(Field::DaysHours), Some(""));
        assert_eq!(record.get_key("Days Hours"), Some(""));
        assert_eq!(record.len(), 2);
    }
}
