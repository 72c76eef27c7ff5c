use serde::{Deserialize, Serialize};

/// How a metric is compared and displayed, decided purely by its name.
///
/// - `Loss`: the literal name `loss`; lower is better.
/// - `Accuracy`: any name containing `accuracy`; higher is better and the
///   value is shown as a percentage.
/// - `Magnitude`: everything else (`lr`, `mae`, custom metrics); shown as a
///   plain number and never styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Loss,
    Accuracy,
    Magnitude,
}

impl MetricKind {
    /// Classifies a base metric name (without the `val_` prefix).
    pub fn of(name: &str) -> MetricKind {
        if name == "loss" {
            MetricKind::Loss
        } else if name.contains("accuracy") {
            MetricKind::Accuracy
        } else {
            MetricKind::Magnitude
        }
    }

    /// `Some(true)` when a larger value is an improvement, `Some(false)` when
    /// a smaller one is, `None` when the metric has no direction.
    pub fn higher_is_better(self) -> Option<bool> {
        match self {
            MetricKind::Loss      => Some(false),
            MetricKind::Accuracy  => Some(true),
            MetricKind::Magnitude => None,
        }
    }

    pub fn is_percentage(self) -> bool {
        self == MetricKind::Accuracy
    }
}
