//! Error types for portprobe.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scanning operations.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("probe of port {port} failed: {reason}")]
    ProbeFailed { port: u16, reason: String },

    #[error("invalid port range: begin ({begin}) > end ({end})")]
    InvalidRange { begin: u16, end: u16 },

    #[error("invalid port specification: {0}")]
    InvalidPortSpec(String),

    /// Not an error for the scan itself; the scanner disables progress
    /// reporting when it sees this.
    #[error("not enough ports to report progress ({total} < 100)")]
    InsufficientRange { total: u32 },
}

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Errors surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for probe and scan operations.
pub type ProbeResult<T> = Result<T, ScanError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScanError::InvalidRange { begin: 10, end: 5 };
        assert_eq!(err.to_string(), "invalid port range: begin (10) > end (5)");

        let err = ScanError::InsufficientRange { total: 50 };
        assert!(err.to_string().contains("50 < 100"));
    }

    #[test]
    fn test_cli_error_is_transparent() {
        let err: CliError = ScanError::InvalidPortSpec("abc".into()).into();
        assert_eq!(err.to_string(), "invalid port specification: abc");
    }
}
