//! # Field Projection
//!
//! Restricts records to a whitelisted, ordered set of fields.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::observability::{log_event_with_fields, Event};

use super::fields::Field;
use super::record::NormalizedRecord;

/// Resolved, ordered list of fields to return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<Field>,
    /// Requested names that are not recognized fields
    rejected: Vec<String>,
}

impl FieldSelection {
    /// Resolve the caller's comma-separated field list.
    ///
    /// The defaults always come first; recognized extras follow in the order
    /// requested. Unknown names are dropped.
    pub fn resolve(requested: Option<&str>) -> Self {
        let mut selection = Self::from_fields(&Field::DEFAULTS);

        let Some(requested) = requested else {
            return selection;
        };

        for name in requested.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match Field::parse(name) {
                Some(field) => selection.push(field),
                None => selection.rejected.push(name.to_string()),
            }
        }

        if !selection.rejected.is_empty() {
            let joined = selection.rejected.join(",");
            log_event_with_fields(Event::FieldsRejected, &[("fields", joined.as_str())]);
        }

        selection
    }

    /// Every recognized field
    pub fn all() -> Self {
        Self::from_fields(&Field::ALL)
    }

    fn from_fields(fields: &[Field]) -> Self {
        Self {
            fields: fields.to_vec(),
            rejected: Vec::new(),
        }
    }

    fn push(&mut self, field: Field) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// A projected record. Serializes as a JSON object in projection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    entries: Vec<(Field, String)>,
}

impl ResponseRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Field names in output order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResponseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

/// Keep the requested fields the record actually has, in requested order
pub fn project(fields: &[Field], record: &NormalizedRecord) -> ResponseRecord {
    let mut entries: Vec<(Field, String)> = Vec::with_capacity(fields.len());
    for field in fields {
        if entries.iter().any(|(f, _)| f == field) {
            continue;
        }
        if let Some(value) = record.get(*field) {
            entries.push((*field, value.to_string()));
        }
    }
    ResponseRecord { entries }
}

pub fn project_all(fields: &[Field], records: &[NormalizedRecord]) -> Vec<ResponseRecord> {
    records.iter().map(|r| project(fields, r)).collect()
}
