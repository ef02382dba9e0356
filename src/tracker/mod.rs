//! # Mobile Food Tracker
//!
//! Query pipeline over the mobile food facility permit dataset. Raw rows
//! from a [`crate::source::SnapshotSource`] are normalized, filtered,
//! sorted, paginated, augmented with a map link and projected to the
//! requested fields.

pub mod augment;
pub mod errors;
pub mod fields;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod projection;
pub mod query;
pub mod record;
pub mod sorter;

pub use errors::{TrackerError, TrackerResult};
pub use fields::Field;
pub use filter::{ExpirationCheck, FilterParse, FilterPredicate, FilterSpec};
pub use pipeline::{find_by_location_id, run_list, TrackerService};
pub use projection::{FieldSelection, ResponseRecord};
pub use query::ListQuery;
pub use record::{normalize, normalize_all, NormalizedRecord, RawRecord};
pub use sorter::SortDirection;
