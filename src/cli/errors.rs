//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::source::SourceError;
use crate::tracker::TrackerError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Server could not start
    BootFailed,
    /// Snapshot could not be obtained
    SourceError,
    /// Requested record does not exist
    NotFound,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TRACKER_CLI_CONFIG_ERROR",
            Self::IoError => "TRACKER_CLI_IO_ERROR",
            Self::BootFailed => "TRACKER_CLI_BOOT_FAILED",
            Self::SourceError => "TRACKER_CLI_SOURCE_ERROR",
            Self::NotFound => "TRACKER_CLI_NOT_FOUND",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        Self::new(CliErrorCode::SourceError, e.to_string())
    }
}

impl From<TrackerError> for CliError {
    fn from(e: TrackerError) -> Self {
        match e {
            TrackerError::DataSource(source) => source.into(),
            not_found => Self::new(CliErrorCode::NotFound, not_found.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::boot_failed("port in use");
        assert_eq!(err.to_string(), "TRACKER_CLI_BOOT_FAILED: port in use");
    }

    #[test]
    fn test_tracker_error_mapping() {
        let not_found: CliError = TrackerError::not_found("42").into();
        assert_eq!(not_found.code(), &CliErrorCode::NotFound);

        let source: CliError = TrackerError::DataSource(SourceError::Status(500)).into();
        assert_eq!(source.code_str(), "TRACKER_CLI_SOURCE_ERROR");
    }
}
