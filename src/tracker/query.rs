//! # List Query Parameters
//!
//! Turns transport-level query parameters into a [`ListQuery`]. Unusable
//! values fall back to their defaults instead of rejecting the request.

use std::collections::HashMap;

use crate::observability::{log_event_with_fields, Event};

use super::sorter::SortDirection;

/// Default number of records returned by `list`
pub const DEFAULT_LIMIT: usize = 10;

/// Default number of records skipped by `list`
pub const DEFAULT_OFFSET: usize = 0;

/// Parameters of a `list` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Comma-separated extra fields
    pub fields: Option<String>,

    /// Raw filter text, parsed later
    pub filter: Option<String>,

    pub sort_dir: SortDirection,

    pub limit: usize,

    pub offset: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            fields: None,
            filter: None,
            sort_dir: SortDirection::Asc,
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl ListQuery {
    /// Build from a query-string map.
    ///
    /// Keys are matched case-insensitively. When one parameter arrives under
    /// several spellings, the exact spelling wins, then the smallest key.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut query = ListQuery::default();

        query.fields = param(params, "fields").map(str::to_string);
        query.filter = param(params, "filter").map(str::to_string);
        if let Some(value) = param(params, "sortDir") {
            query.sort_dir = parse_or("sortDir", value, SortDirection::Asc, SortDirection::parse);
        }
        if let Some(value) = param(params, "limit") {
            query.limit = parse_or("limit", value, DEFAULT_LIMIT, parse_count);
        }
        if let Some(value) = param(params, "offset") {
            query.offset = parse_or("offset", value, DEFAULT_OFFSET, parse_count);
        }

        query
    }

    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_sort_dir(mut self, sort_dir: SortDirection) -> Self {
        self.sort_dir = sort_dir;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    if let Some(value) = params.get(name) {
        return Some(value.as_str());
    }
    params
        .iter()
        .filter(|(key, _)| key.eq_ignore_ascii_case(name))
        .min_by(|a, b| a.0.cmp(b.0))
        .map(|(_, value)| value.as_str())
}

fn parse_count(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

fn parse_or<T>(name: &str, value: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> T {
    parse(value).unwrap_or_else(|| {
        log_event_with_fields(Event::QueryParamDefaulted, &[("param", name), ("value", value)]);
        default
    })
}
