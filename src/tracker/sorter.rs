//! Ordering of record sequences by applicant name.

use std::cmp::Ordering;
use std::fmt;

use super::fields::Field;
use super::record::NormalizedRecord;

/// Requested sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `ASC` / `DESC`
    pub fn parse(value: &str) -> Option<SortDirection> {
        match value.trim().to_uppercase().as_str() {
            "ASC" => Some(SortDirection::Asc),
            "DESC" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-way comparison on `applicant`; a missing value sorts as "".
pub fn compare_applicants(a: &NormalizedRecord, b: &NormalizedRecord) -> Ordering {
    let a = a.get(Field::Applicant).unwrap_or("");
    let b = b.get(Field::Applicant).unwrap_or("");
    a.cmp(b)
}

/// Sort by applicant name.
///
/// Stable in both directions: records with equal names keep their input order.
pub fn sort_by_applicant(
    mut records: Vec<NormalizedRecord>,
    direction: SortDirection,
) -> Vec<NormalizedRecord> {
    records.sort_by(|a, b| {
        let ordering = compare_applicants(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    records
}
