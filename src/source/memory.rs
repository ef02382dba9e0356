//! In-memory snapshot source.

use crate::tracker::RawRecord;

use super::{SnapshotFuture, SnapshotSource};

/// Serves a fixed set of rows
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotSource {
    rows: Vec<RawRecord>,
}

impl StaticSnapshotSource {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }

    /// Build rows from `(column, value)` pairs
    pub fn from_pairs(rows: &[&[(&str, &str)]]) -> Self {
        let rows = rows
            .iter()
            .map(|pairs| {
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

impl SnapshotSource for StaticSnapshotSource {
    fn fetch_snapshot(&self) -> SnapshotFuture<'_> {
        Box::pin(async move { Ok(self.rows.clone()) })
    }

    fn describe(&self) -> String {
        format!("static({} rows)", self.rows.len())
    }
}
