//! Observability
//!
//! Structured JSON logging for the tracker:
//! - typed [`Event`]s with a fixed severity each
//! - [`Logger`] writing one JSON object per line to stderr
//! - [`ObservationScope`] for begin/complete pairs with elapsed time
//!
//! # Usage
//!
//! ```ignore
//! use food_tracker::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::SnapshotFetched, &[("rows", "482")]);
//!
//! let scope = ObservationScope::new("TRACKER_LIST");
//! // ... run the pipeline ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
