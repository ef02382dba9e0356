//! Local CSV file source.

use std::path::PathBuf;

use super::csv_decode::decode_csv;
use super::{SnapshotFuture, SnapshotSource};

/// Reads the snapshot from a CSV export on disk
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn fetch_snapshot(&self) -> SnapshotFuture<'_> {
        Box::pin(async move {
            let text = tokio::fs::read_to_string(&self.path).await?;
            decode_csv(&text)
        })
    }

    fn describe(&self) -> String {
        format!("file({})", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locationid,Applicant").unwrap();
        writeln!(file, "1735061,Bay Area Mobile Catering").unwrap();

        let source = FileSnapshotSource::new(file.path());
        let rows = source.fetch_snapshot().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Applicant"], "Bay Area Mobile Catering");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = FileSnapshotSource::new(dir.path().join("missing.csv"));

        let result = source.fetch_snapshot().await;
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
