use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::history::MetricHistory;

/// Per-epoch metric values of the current run, keyed by metric name
/// (`loss`, `accuracy`, `val_loss`, `lr`, ...) and ordered by name.
///
/// Each series holds one value per completed epoch; only the last one is
/// used when building a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingHistory {
    series: BTreeMap<String, Vec<f64>>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one epoch's value for `name`.
    pub fn record(&mut self, name: &str, value: f64) {
        self.series.entry(name.to_string()).or_default().push(value);
    }

    /// Builder-style: replaces the whole series for `name`.
    pub fn with_series(mut self, name: &str, values: impl Into<Vec<f64>>) -> Self {
        self.series.insert(name.to_string(), values.into());
        self
    }

    /// Number of epochs recorded, i.e. the longest series.
    pub fn epochs(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }
}

impl MetricHistory for TrainingHistory {
    fn last_value(&self, key: &str) -> Option<f64> {
        self.series.get(key)?.last().copied()
    }

    fn keys(&self) -> Vec<&str> {
        self.series.keys().map(String::as_str).collect()
    }
}
