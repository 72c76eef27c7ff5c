use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Formatting and output settings for a metrics report.
///
/// Every field has a default, so a partial JSON file (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Decimal digits kept when rounding metric values and when printing the
    /// learning rate.
    #[serde(default = "default_value_precision")]
    pub value_precision: u32,
    /// Decimal places of accuracy-family percentages.
    #[serde(default = "default_percent_precision")]
    pub percent_precision: usize,
    /// Whether `print_metrics` hands back the raw current-run evaluation
    /// results.
    #[serde(default = "default_return_metrics")]
    pub return_metrics: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            value_precision: default_value_precision(),
            percent_precision: default_percent_precision(),
            return_metrics: default_return_metrics(),
        }
    }
}

fn default_value_precision() -> u32 {
    10
}

fn default_percent_precision() -> usize {
    2
}

fn default_return_metrics() -> bool {
    true
}

impl ReportOptions {
    /// Deserializes options from a JSON file.
    pub fn load_json(path: &str) -> Result<ReportOptions, ReportError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the options to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), ReportError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ReportOptions::default();
        assert_eq!(opts.value_precision, 10);
        assert_eq!(opts.percent_precision, 2);
        assert!(opts.return_metrics);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let opts: ReportOptions = serde_json::from_str(r#"{"percent_precision": 1}"#).unwrap();
        assert_eq!(opts.percent_precision, 1);
        assert_eq!(opts.value_precision, 10);
        assert!(opts.return_metrics);
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("metrics-report-opts-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let opts = ReportOptions { percent_precision: 3, return_metrics: false, ..ReportOptions::default() };
        opts.save_json(path).unwrap();
        let loaded = ReportOptions::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ReportOptions::load_json("/nonexistent/metrics-report.json").unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
