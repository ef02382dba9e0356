//! # Query Pipeline
//!
//! `list`: normalize → filter → sort → paginate → augment → project.
//! `get_by_location_id`: normalize → find → augment → project (all fields).
//!
//! Every stage after the snapshot fetch is synchronous and total. The
//! snapshot is fetched fresh for each call and nothing is shared between
//! calls.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::source::SnapshotSource;

use super::augment::augment;
use super::errors::{TrackerError, TrackerResult};
use super::fields::Field;
use super::filter::FilterParse;
use super::paginate::paginate;
use super::projection::{project, project_all, FieldSelection, ResponseRecord};
use super::query::ListQuery;
use super::record::{normalize_all, NormalizedRecord, RawRecord};
use super::sorter::sort_by_applicant;

/// Run `list` over an already fetched snapshot
pub fn run_list(snapshot: &[RawRecord], query: &ListQuery, now: DateTime<Utc>) -> Vec<ResponseRecord> {
    let limit = query.limit.to_string();
    let offset = query.offset.to_string();
    let scope = ObservationScope::with_fields(
        "TRACKER_LIST",
        &[
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
            ("sort_dir", query.sort_dir.as_str()),
        ],
    );

    let selection = FieldSelection::resolve(query.fields.as_deref());
    let predicate = FilterParse::parse(query.filter.as_deref())
        .into_spec()
        .compile(now);

    let matched: Vec<NormalizedRecord> = normalize_all(snapshot)
        .into_iter()
        .filter(|record| predicate.matches(record))
        .collect();
    let matched_count = matched.len().to_string();

    let sorted = sort_by_applicant(matched, query.sort_dir);
    let page: Vec<NormalizedRecord> = paginate(sorted, query.offset, query.limit)
        .into_iter()
        .map(augment)
        .collect();
    let response = project_all(selection.fields(), &page);

    let returned = response.len().to_string();
    scope.complete_with_fields(&[
        ("matched", matched_count.as_str()),
        ("returned", returned.as_str()),
    ]);
    response
}

/// Run `get_by_location_id` over an already fetched snapshot
pub fn find_by_location_id(snapshot: &[RawRecord], location_id: &str) -> TrackerResult<ResponseRecord> {
    let record = normalize_all(snapshot)
        .into_iter()
        .find(|record| record.get(Field::LocationId) == Some(location_id));

    match record {
        Some(record) => Ok(project(FieldSelection::all().fields(), &augment(record))),
        None => {
            log_event_with_fields(Event::RecordNotFound, &[("location_id", location_id)]);
            Err(TrackerError::not_found(location_id))
        }
    }
}

/// The two public tracker operations over an injected snapshot source
#[derive(Clone)]
pub struct TrackerService {
    source: Arc<dyn SnapshotSource>,
}

impl TrackerService {
    pub fn new(source: impl SnapshotSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_arc(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    /// List records matching the query
    pub async fn list(&self, query: &ListQuery) -> TrackerResult<Vec<ResponseRecord>> {
        let snapshot = self.snapshot().await?;
        Ok(run_list(&snapshot, query, Utc::now()))
    }

    /// Fetch one record by its `locationid`, with every recognized field
    pub async fn get_by_location_id(&self, location_id: &str) -> TrackerResult<ResponseRecord> {
        let snapshot = self.snapshot().await?;
        find_by_location_id(&snapshot, location_id)
    }

    async fn snapshot(&self) -> TrackerResult<Vec<RawRecord>> {
        let source = self.source.describe();
        match self.source.fetch_snapshot().await {
            Ok(rows) => {
                let count = rows.len().to_string();
                log_event_with_fields(
                    Event::SnapshotFetched,
                    &[("rows", count.as_str()), ("source", source.as_str())],
                );
                Ok(rows)
            }
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::SnapshotFetchFailed,
                    &[("reason", reason.as_str()), ("source", source.as_str())],
                );
                Err(TrackerError::DataSource(e))
            }
        }
    }
}
