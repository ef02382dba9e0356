//! Snapshot acquisition errors.

use thiserror::Error;

/// Result type for snapshot acquisition
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure to obtain or decode the upstream snapshot
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure talking to the upstream service
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream responded with status {0}")]
    Status(u16),

    /// The payload is not valid CSV
    #[error("Upstream data could not be decoded: {0}")]
    Decode(#[from] csv::Error),

    /// A local snapshot file could not be read
    #[error("Snapshot file could not be read: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SourceError::Status(503).to_string(),
            "Upstream responded with status 503"
        );

        let io = SourceError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.to_string().contains("gone"));
    }
}
