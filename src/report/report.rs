use serde::Serialize;

use crate::metrics::{display_label, validation_key, ComparisonStyle, MetricKind, MetricValue};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// The three stacked blocks of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Training,
    Validation,
    Test,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Training, SectionKind::Validation, SectionKind::Test];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Training   => "Training",
            SectionKind::Validation => "Validation",
            SectionKind::Test       => "Test",
        }
    }

    /// History key holding `name` for this section; validation metrics carry
    /// the `val_` prefix.
    pub fn history_key(self, name: &str) -> String {
        match self {
            SectionKind::Validation => validation_key(name),
            _ => name.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// Epoch count and learning rate of one run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RunSummary {
    /// `None` when unknown; an epoch count of 0 is stored as `None`.
    pub epochs: Option<usize>,
    pub learning_rate: Option<f64>,
}

impl RunSummary {
    pub fn new(epochs: Option<usize>, learning_rate: Option<f64>) -> Self {
        RunSummary {
            epochs: epochs.filter(|&e| e != 0),
            learning_rate,
        }
    }
}

/// One metric line: previous value, current value and how the current value
/// should be styled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Base metric name, e.g. `accuracy` (also for the validation section).
    pub metric: String,
    pub label: String,
    pub kind: MetricKind,
    pub previous: MetricValue,
    pub current: MetricValue,
    pub style: ComparisonStyle,
}

impl ReportRow {
    /// `percent_precision` must match the one used to render the row, so the
    /// style agrees with the percentages shown.
    pub fn new(metric: &str, previous: MetricValue, current: MetricValue, percent_precision: usize) -> Self {
        let kind = MetricKind::of(metric);
        ReportRow {
            metric: metric.to_string(),
            label: display_label(metric),
            kind,
            previous,
            current,
            style: ComparisonStyle::compare(previous, current, kind, percent_precision),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    pub fn row(&self, metric: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The reconciled comparison, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub previous: RunSummary,
    pub current: RunSummary,
    pub training: ReportSection,
    pub validation: ReportSection,
    pub test: ReportSection,
}

impl Report {
    pub fn section(&self, kind: SectionKind) -> &ReportSection {
        match kind {
            SectionKind::Training   => &self.training,
            SectionKind::Validation => &self.validation,
            SectionKind::Test       => &self.test,
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> [&ReportSection; 3] {
        [&self.training, &self.validation, &self.test]
    }

    /// Metric names in row order (the same for every section).
    pub fn metric_names(&self) -> Vec<&str> {
        self.training.rows.iter().map(|r| r.metric.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Raw current-run evaluation results keyed by the originally resolved metric
/// names. `None` when no evaluation ran or the evaluator did not report that
/// metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawMetrics(Vec<(String, Option<f64>)>);

impl RawMetrics {
    pub fn new(entries: Vec<(String, Option<f64>)>) -> Self {
        RawMetrics(entries)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).and_then(|&(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.0.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Output of `reconcile`: the report plus the raw-number companion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub report: Report,
    pub raw_metrics: RawMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_epochs_normalized() {
        assert_eq!(RunSummary::new(Some(0), None).epochs, None);
        assert_eq!(RunSummary::new(Some(12), None).epochs, Some(12));
    }

    #[test]
    fn test_history_key_per_section() {
        assert_eq!(SectionKind::Training.history_key("loss"), "loss");
        assert_eq!(SectionKind::Validation.history_key("loss"), "val_loss");
        assert_eq!(SectionKind::Test.history_key("loss"), "loss");
    }

    #[test]
    fn test_row_computes_style_and_label() {
        let row = ReportRow::new("categorical_accuracy", MetricValue::Value(0.7), MetricValue::Value(0.8), 2);
        assert_eq!(row.label, "Categorical Accuracy");
        assert_eq!(row.kind, MetricKind::Accuracy);
        assert_eq!(row.style, ComparisonStyle::Improved);
    }

    #[test]
    fn test_raw_metrics_lookup() {
        let raw = RawMetrics::new(vec![("loss".into(), Some(0.31)), ("accuracy".into(), None)]);
        assert_eq!(raw.get("loss"), Some(0.31));
        assert_eq!(raw.get("accuracy"), None);
        assert!(raw.contains("accuracy"));
        assert!(!raw.contains("mae"));
    }
}
