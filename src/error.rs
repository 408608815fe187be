//! Error definitions.
//!
//! Logging calls never return these. They surface only from parsing
//! (`Level::from_str`) and are otherwise rendered into console notices.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while configuring a logger.
#[derive(Debug, Error)]
pub enum LogError {
    /// Severity name not one of trace/debug/info/warn/error/disabled.
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    /// Timestamp format chrono cannot render.
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// The file destination could not be opened for append.
    #[error("failed to open log file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogError::InvalidLevel("loud".into());
        assert_eq!(err.to_string(), "invalid log level: \"loud\"");

        let err = LogError::FileOpen {
            path: PathBuf::from("/nope/app.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to open log file /nope/app.log: missing");

        let err = LogError::InvalidTimeFormat("%Q".into());
        assert_eq!(err.to_string(), "invalid time format: \"%Q\"");
    }
}
