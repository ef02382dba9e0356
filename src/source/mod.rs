//! # Snapshot Sources
//!
//! The tracker reads the whole permit dataset on every call. Where the rows
//! come from is behind [`SnapshotSource`], so the pipeline never owns a
//! client or any shared state.

mod csv_decode;
mod errors;
mod file;
mod http;
mod memory;

use std::future::Future;
use std::pin::Pin;

use crate::tracker::RawRecord;

pub use csv_decode::decode_csv;
pub use errors::{SourceError, SourceResult};
pub use file::FileSnapshotSource;
pub use http::{HttpSnapshotSource, DEFAULT_SOURCE_URL};
pub use memory::StaticSnapshotSource;

/// Future returned by [`SnapshotSource::fetch_snapshot`]
pub type SnapshotFuture<'a> = Pin<Box<dyn Future<Output = SourceResult<Vec<RawRecord>>> + Send + 'a>>;

/// Supplies the raw dataset rows
pub trait SnapshotSource: Send + Sync {
    /// Fetch and decode a fresh snapshot
    fn fetch_snapshot(&self) -> SnapshotFuture<'_>;

    /// Short description for logs
    fn describe(&self) -> String;
}
