//! End-to-end tests over a two-row CSV export of the permit dataset.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use food_tracker::config::TrackerConfig;
use food_tracker::http_server::HttpServer;
use food_tracker::source::{decode_csv, FileSnapshotSource};
use food_tracker::tracker::{
    run_list, Field, ListQuery, ResponseRecord, SortDirection, TrackerError, TrackerService,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.csv")
}

fn service() -> TrackerService {
    TrackerService::new(FileSnapshotSource::new(fixture()))
}

fn ids(records: &[ResponseRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.get(Field::LocationId).unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_defaults() {
    let records = service().list(&ListQuery::default()).await.unwrap();

    assert_eq!(ids(&records), vec!["1735061", "1750910"]);
    for record in &records {
        assert!(!record.contains(Field::FoodItems));
        assert!(record.contains(Field::Applicant));
        assert!(record.contains(Field::GoogleMapsUrl));
    }
    assert!(records[0]
        .get(Field::Applicant)
        .unwrap()
        .starts_with("Bay Area Mobile Catering"));
}

#[tokio::test]
async fn test_list_offset_past_end() {
    let records = service()
        .list(&ListQuery::default().with_offset(100))
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_list_extra_fields_with_offset() {
    let query = ListQuery::default()
        .with_fields("fooditems,facilitytype")
        .with_offset(1);
    let records = service().list(&query).await.unwrap();

    assert_eq!(ids(&records), vec!["1750910"]);
    assert_eq!(records[0].get(Field::FacilityType), Some("Push Cart"));
    assert_eq!(
        records[0].get(Field::FoodItems),
        Some("Hot dogs: Condiments: Soft drinks")
    );
}

#[tokio::test]
async fn test_list_filter_desc_limit() {
    let query = ListQuery::default()
        .with_filter(r#"{"facilitytype":"Push Cart"}"#)
        .with_sort_dir(SortDirection::Desc)
        .with_limit(1);
    let records = service().list(&query).await.unwrap();

    assert_eq!(ids(&records), vec!["1750910"]);
}

#[tokio::test]
async fn test_malformed_filter_matches_unfiltered() {
    let service = service();
    let unfiltered = service.list(&ListQuery::default()).await.unwrap();
    let malformed = service
        .list(&ListQuery::default().with_filter("test!!!#$#@$@#$"))
        .await
        .unwrap();

    assert_eq!(malformed, unfiltered);
}

#[tokio::test]
async fn test_get_by_location_id() {
    let service = service();

    let record = service.get_by_location_id("1735061").await.unwrap();
    assert_eq!(record.get(Field::LocationId), Some("1735061"));
    assert!(record.contains(Field::Applicant));
    assert_eq!(record.get(Field::Status), Some("APPROVED"));

    let missing = service.get_by_location_id("nonexistent").await;
    assert!(matches!(missing, Err(TrackerError::NotFound { .. })));
}

#[tokio::test]
async fn test_blank_cells_are_returned() {
    let service = service();

    let record = service.get_by_location_id("1735061").await.unwrap();
    assert_eq!(record.get(Field::DaysHours), Some(""));

    let query = ListQuery::default().with_fields("expirationdate,dayshours");
    let records = service.list(&query).await.unwrap();
    for record in &records {
        assert!(record.contains(Field::DaysHours));
        assert!(record.contains(Field::ExpirationDate));
    }
    assert_eq!(records[1].get(Field::ExpirationDate), Some(""));
}

#[test]
fn test_exclude_expired_uses_filter_date() {
    let text = std::fs::read_to_string(fixture()).unwrap();
    let rows = decode_csv(&text).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let future = ListQuery::default()
        .with_filter(r#"{"excludeExpired":true,"expirationDate":"2030-01-01"}"#);
    assert_eq!(ids(&run_list(&rows, &future, now)), vec!["1735061", "1750910"]);

    let past = ListQuery::default()
        .with_filter(r#"{"excludeExpired":true,"expirationDate":"2020-01-01"}"#);
    assert!(run_list(&rows, &past, now).is_empty());

    let missing = ListQuery::default().with_filter(r#"{"excludeExpired":true}"#);
    assert!(run_list(&rows, &missing, now).is_empty());
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let router = HttpServer::new(TrackerConfig::default(), service()).router();
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_http_list_and_get() {
    let (status, body) = get_json("/api/tracker?fields=fooditems&sortDir=desc").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records[0]["locationid"], "1750910");
    assert_eq!(
        records[0]["googlemapsurl"],
        "http://maps.google.com/maps?z=12&t=m&q=loc:37.79357151+-122.3971636"
    );

    let (status, body) = get_json("/api/tracker/1735061").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["facilitytype"], "Truck");

    let (status, body) = get_json("/api/tracker/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Mobile Food data with locationId nonexistent cannot be found."
    );
}

#[tokio::test]
async fn test_http_healthcheck() {
    let (status, body) = get_json("/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "OK");
}
