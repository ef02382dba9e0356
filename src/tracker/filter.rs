//! # Filter Expressions
//!
//! Callers pass an optional JSON object such as
//!
//! ```text
//! { "applicant": "Bay Area", "foodItems": "hot dogs", "status": "APPROVED",
//!   "facilityType": "Push Cart", "excludeExpired": true,
//!   "expirationDate": "2030-01-01" }
//! ```
//!
//! The text is untrusted. Anything that does not decode to an object
//! degrades to the empty filter instead of failing the request.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};

use crate::observability::{log_event_with_fields, Event};

use super::fields::Field;
use super::record::{normalize_key, NormalizedRecord};

/// Canonical filter keys. Anything else in a filter object is ignored.
pub const FILTER_KEYS: [&str; 6] = [
    "applicant",
    "fooditems",
    "status",
    "facilitytype",
    "excludeexpired",
    "expirationdate",
];

/// Compiled regexes are capped so a hostile pattern cannot balloon memory
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Structured predicate. Every absent sub-condition passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive regex over `applicant`
    pub applicant_pattern: Option<String>,
    /// Case-insensitive regex over `fooditems`
    pub food_items_pattern: Option<String>,
    /// Case-insensitive equality on `status`
    pub status: Option<String>,
    /// Case-insensitive equality on `facilitytype`
    pub facility_type: Option<String>,
    pub exclude_expired: bool,
    /// Comparison value consulted when `exclude_expired` is set
    pub expiration_date: Option<String>,
}

/// Outcome of parsing caller-supplied filter text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParse {
    /// No filter text was supplied
    Absent,
    /// A filter object was decoded
    Parsed {
        spec: FilterSpec,
        /// Normalized keys outside [`FILTER_KEYS`] or with unusable values
        ignored_keys: Vec<String>,
    },
    /// The text could not be used; filtering is skipped
    Malformed { reason: String },
}

impl FilterParse {
    /// Parse optional filter text. Never fails.
    pub fn parse(input: Option<&str>) -> Self {
        let text = match input.map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => return FilterParse::Absent,
        };

        let object = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => object,
            Ok(other) => {
                return Self::degrade(format!("filter must be a JSON object, got {}", json_kind(&other)))
            }
            Err(e) => return Self::degrade(format!("filter is not valid JSON: {}", e)),
        };

        let (spec, ignored_keys) = spec_from_object(&object);
        if !ignored_keys.is_empty() {
            let joined = ignored_keys.join(",");
            log_event_with_fields(Event::FilterKeysIgnored, &[("keys", joined.as_str())]);
        }

        FilterParse::Parsed { spec, ignored_keys }
    }

    fn degrade(reason: String) -> Self {
        log_event_with_fields(Event::FilterDegraded, &[("reason", reason.as_str())]);
        FilterParse::Malformed { reason }
    }

    /// True when the caller supplied text that could not be used
    pub fn is_degraded(&self) -> bool {
        matches!(self, FilterParse::Malformed { .. })
    }

    /// The effective filter; absent and malformed input match everything
    pub fn into_spec(self) -> FilterSpec {
        match self {
            FilterParse::Parsed { spec, .. } => spec,
            FilterParse::Absent | FilterParse::Malformed { .. } => FilterSpec::default(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn spec_from_object(object: &Map<String, Value>) -> (FilterSpec, Vec<String>) {
    let mut spec = FilterSpec::default();
    let mut ignored = Vec::new();

    for (key, value) in object {
        let key = normalize_key(key);
        let accepted = match key.as_str() {
            "applicant" => set_text(&mut spec.applicant_pattern, value),
            "fooditems" => set_text(&mut spec.food_items_pattern, value),
            "status" => set_text(&mut spec.status, value),
            "facilitytype" => set_text(&mut spec.facility_type, value),
            "expirationdate" => set_text(&mut spec.expiration_date, value),
            "excludeexpired" => {
                spec.exclude_expired = is_truthy(value);
                true
            }
            _ => false,
        };
        if !accepted {
            ignored.push(key);
        }
    }

    (spec, ignored)
}

/// Stores scalar values as text. Empty strings count as "not supplied".
fn set_text(slot: &mut Option<String>, value: &Value) -> bool {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return false,
    };
    *slot = Some(text).filter(|t| !t.is_empty());
    true
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parse the comparison value of an expiration filter.
///
/// Naive timestamps and plain dates are read as UTC.
pub fn parse_expiration_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Result of the expiration sub-condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationCheck {
    /// `excludeExpired` was not set
    NotRequested,
    /// The comparison date is at or after evaluation time
    Current,
    /// The comparison date is before evaluation time
    Expired,
    /// Missing or unparseable comparison date; treated as expired
    Unparseable,
}

impl ExpirationCheck {
    pub fn keeps(self) -> bool {
        matches!(self, ExpirationCheck::NotRequested | ExpirationCheck::Current)
    }
}

/// Text matcher for the pattern sub-conditions
#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    /// The pattern did not compile; fall back to substring search
    Literal(String),
}

impl Matcher {
    fn new(pattern: &str) -> Self {
        let pattern = pattern.to_lowercase();
        match RegexBuilder::new(&pattern).size_limit(PATTERN_SIZE_LIMIT).build() {
            Ok(re) => Matcher::Regex(re),
            Err(_) => Matcher::Literal(pattern),
        }
    }

    fn is_match(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        match self {
            Matcher::Regex(re) => re.is_match(&value),
            Matcher::Literal(needle) => value.contains(needle.as_str()),
        }
    }
}

/// A [`FilterSpec`] prepared for evaluation at a fixed instant
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    applicant: Option<Matcher>,
    food_items: Option<Matcher>,
    status: Option<String>,
    facility_type: Option<String>,
    expiration: ExpirationCheck,
}

impl FilterPredicate {
    /// Check a record against every present sub-condition
    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        let field = |f: Field| record.get(f).unwrap_or("");

        self.expiration.keeps()
            && self
                .applicant
                .as_ref()
                .map_or(true, |m| m.is_match(field(Field::Applicant)))
            && self
                .food_items
                .as_ref()
                .map_or(true, |m| m.is_match(field(Field::FoodItems)))
            && self
                .status
                .as_ref()
                .map_or(true, |s| field(Field::Status).to_lowercase() == *s)
            && self
                .facility_type
                .as_ref()
                .map_or(true, |t| field(Field::FacilityType).to_lowercase() == *t)
    }

    pub fn expiration(&self) -> ExpirationCheck {
        self.expiration
    }
}

impl FilterSpec {
    /// True when no sub-condition is present
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Evaluate the expiration sub-condition.
    ///
    /// The comparison date comes from the filter, not from the record.
    pub fn expiration_check(&self, now: DateTime<Utc>) -> ExpirationCheck {
        if !self.exclude_expired {
            return ExpirationCheck::NotRequested;
        }
        match self.expiration_date.as_deref().and_then(parse_expiration_date) {
            Some(date) if date >= now => ExpirationCheck::Current,
            Some(_) => ExpirationCheck::Expired,
            None => ExpirationCheck::Unparseable,
        }
    }

    /// Prepare for evaluation against many records
    pub fn compile(&self, now: DateTime<Utc>) -> FilterPredicate {
        FilterPredicate {
            applicant: self.applicant_pattern.as_deref().map(Matcher::new),
            food_items: self.food_items_pattern.as_deref().map(Matcher::new),
            status: self.status.as_ref().map(|s| s.to_lowercase()),
            facility_type: self.facility_type.as_ref().map(|t| t.to_lowercase()),
            expiration: self.expiration_check(now),
        }
    }

    pub fn matches_at(&self, record: &NormalizedRecord, now: DateTime<Utc>) -> bool {
        self.compile(now).matches(record)
    }

    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        self.matches_at(record, Utc::now())
    }
}
