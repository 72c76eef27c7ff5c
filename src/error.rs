//! Error types for the metrics-report crate.

use thiserror::Error;

/// Everything that can stop a report from being built.
///
/// Missing data (no previous run, no test inputs, metrics that only one run
/// logged) is never an error; it shows up as blank cells instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ReportError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ReportError::config("no way to determine metric names");
        assert_eq!(
            err.to_string(),
            "Configuration error: no way to determine metric names"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: ReportError = io.into();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
