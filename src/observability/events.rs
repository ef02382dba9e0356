//! Observable events
//!
//! Events are explicit and typed; each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Startup failed
    BootFailed,

    // Snapshot acquisition
    /// Upstream snapshot fetched and decoded
    SnapshotFetched,
    /// Upstream snapshot could not be obtained
    SnapshotFetchFailed,

    // Query degradation
    /// Filter text unusable, filtering skipped
    FilterDegraded,
    /// Filter object carried unrecognized keys
    FilterKeysIgnored,
    /// Requested field names not recognized
    FieldsRejected,
    /// Query parameter unusable, default applied
    QueryParamDefaulted,

    // Lookups
    /// No record with the requested location id
    RecordNotFound,

    // Transport
    /// HTTP request answered
    HttpRequest,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "TRACKER_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "TRACKER_SERVING",
            Event::BootFailed => "TRACKER_STARTUP_FAILED",

            Event::SnapshotFetched => "SNAPSHOT_FETCHED",
            Event::SnapshotFetchFailed => "SNAPSHOT_FETCH_FAILED",

            Event::FilterDegraded => "FILTER_DEGRADED",
            Event::FilterKeysIgnored => "FILTER_KEYS_IGNORED",
            Event::FieldsRejected => "FIELDS_REJECTED",
            Event::QueryParamDefaulted => "QUERY_PARAM_DEFAULTED",

            Event::RecordNotFound => "RECORD_NOT_FOUND",

            Event::HttpRequest => "HTTP_REQUEST",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::SnapshotFetchFailed => Severity::Error,
            Event::FilterDegraded
            | Event::FilterKeysIgnored
            | Event::FieldsRejected
            | Event::QueryParamDefaulted => Severity::Warn,
            Event::RecordNotFound => Severity::Trace,
            Event::BootStart
            | Event::ConfigLoaded
            | Event::Serving
            | Event::SnapshotFetched
            | Event::HttpRequest => Severity::Info,
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
