use serde::{Deserialize, Serialize};

use crate::metrics::kind::MetricKind;
use crate::metrics::value::MetricValue;

/// Direction of change of the current value relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStyle {
    Improved,
    Regressed,
    #[default]
    Neutral,
}

impl ComparisonStyle {
    /// Compares the numbers as displayed: accuracy-family values at
    /// `percent_precision` decimals of a percent, others as stored.
    ///
    /// Neutral when either side is `Empty`, when the metric has no direction,
    /// or when the displayed numbers are equal.
    pub fn compare(
        previous: MetricValue,
        current: MetricValue,
        kind: MetricKind,
        percent_precision: usize,
    ) -> ComparisonStyle {
        let Some(higher_is_better) = kind.higher_is_better() else {
            return ComparisonStyle::Neutral;
        };
        let (Some(prev), Some(curr)) = (
            previous.display_magnitude(kind, percent_precision),
            current.display_magnitude(kind, percent_precision),
        ) else {
            return ComparisonStyle::Neutral;
        };

        let delta = curr - prev;
        if delta > 0.0 {
            if higher_is_better { ComparisonStyle::Improved } else { ComparisonStyle::Regressed }
        } else if delta < 0.0 {
            if higher_is_better { ComparisonStyle::Regressed } else { ComparisonStyle::Improved }
        } else {
            // Zero or NaN.
            ComparisonStyle::Neutral
        }
    }

    /// Inline CSS for the current-value cell, if any.
    pub fn css(self) -> Option<&'static str> {
        match self {
            ComparisonStyle::Improved  => Some("color: green; font-weight:bold;"),
            ComparisonStyle::Regressed => Some("color: tomato;"),
            ComparisonStyle::Neutral   => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64) -> MetricValue {
        MetricValue::Value(x)
    }

    #[test]
    fn test_lower_loss_is_improved() {
        let style = ComparisonStyle::compare(v(0.5), v(0.3), MetricKind::Loss, 2);
        assert_eq!(style, ComparisonStyle::Improved);
        let style = ComparisonStyle::compare(v(0.3), v(0.5), MetricKind::Loss, 2);
        assert_eq!(style, ComparisonStyle::Regressed);
    }

    #[test]
    fn test_lower_accuracy_is_regressed() {
        let style = ComparisonStyle::compare(v(0.80), v(0.75), MetricKind::Accuracy, 2);
        assert_eq!(style, ComparisonStyle::Regressed);
    }

    #[test]
    fn test_accuracy_below_display_resolution_is_neutral() {
        let style = ComparisonStyle::compare(v(0.87651), v(0.87652), MetricKind::Accuracy, 2);
        assert_eq!(style, ComparisonStyle::Neutral);
        let style = ComparisonStyle::compare(v(0.87651), v(0.87659), MetricKind::Accuracy, 3);
        assert_eq!(style, ComparisonStyle::Improved);
    }

    #[test]
    fn test_empty_side_is_neutral() {
        for kind in [MetricKind::Loss, MetricKind::Accuracy] {
            assert_eq!(ComparisonStyle::compare(MetricValue::Empty, v(0.1), kind, 2), ComparisonStyle::Neutral);
            assert_eq!(ComparisonStyle::compare(v(0.9), MetricValue::Empty, kind, 2), ComparisonStyle::Neutral);
        }
    }

    #[test]
    fn test_equal_or_undirected_is_neutral() {
        assert_eq!(ComparisonStyle::compare(v(0.4), v(0.4), MetricKind::Loss, 2), ComparisonStyle::Neutral);
        assert_eq!(ComparisonStyle::compare(v(0.1), v(0.9), MetricKind::Magnitude, 2), ComparisonStyle::Neutral);
    }

    #[test]
    fn test_css() {
        assert!(ComparisonStyle::Improved.css().unwrap().contains("green"));
        assert_eq!(ComparisonStyle::Neutral.css(), None);
    }
}
