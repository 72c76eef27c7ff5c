use serde::{Deserialize, Serialize};

use crate::metrics::kind::MetricKind;

/// One cell of the report.
///
/// `Empty` is the "not available for this run/section" marker and is distinct
/// from a numeric zero. Serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    #[default]
    Empty,
    Value(f64),
}

impl MetricValue {
    /// Rounds `raw` to `digits` decimal places; `None` becomes `Empty`.
    pub fn rounded(raw: Option<f64>, digits: u32) -> MetricValue {
        match raw {
            Some(v) => MetricValue::Value(round_to(v, digits)),
            None    => MetricValue::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MetricValue::Empty)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            MetricValue::Value(v) => Some(v),
            MetricValue::Empty    => None,
        }
    }

    /// The number a reader sees in the cell. Accuracy-family values are
    /// scaled to percent and cut to `percent_precision` decimals, exactly as
    /// `render` prints them; everything else is the stored value.
    pub fn display_magnitude(&self, kind: MetricKind, percent_precision: usize) -> Option<f64> {
        let v = self.as_f64()?;
        if kind.is_percentage() {
            percent_text(v, percent_precision).parse().ok()
        } else {
            Some(v)
        }
    }

    /// Display text for a cell.
    ///
    /// Accuracy-family values are scaled by 100 and shown with
    /// `percent_precision` decimals plus a `%`; other values use the shortest
    /// decimal form of the stored number. `Empty` renders as an empty string.
    pub fn render(&self, kind: MetricKind, percent_precision: usize) -> String {
        match *self {
            MetricValue::Empty => String::new(),
            MetricValue::Value(v) if kind.is_percentage() => {
                format!("{}%", percent_text(v, percent_precision))
            }
            MetricValue::Value(v) => format!("{}", v),
        }
    }
}

/// `0.87651` -> `"87.65"` at two decimals.
fn percent_text(v: f64, percent_precision: usize) -> String {
    format!("{:.*}", percent_precision, 100.0 * v)
}

/// Rounds half away from zero to `digits` decimal places.
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_ten_digits() {
        assert_eq!(round_to(0.8765432109876, 10), 0.876543211);
        assert_eq!(round_to(0.5, 10), 0.5);
        assert_eq!(round_to(f64::MAX, 10), f64::MAX);
    }

    #[test]
    fn test_rounded_none_is_empty() {
        assert_eq!(MetricValue::rounded(None, 10), MetricValue::Empty);
        assert_eq!(MetricValue::rounded(Some(0.0), 10), MetricValue::Value(0.0));
        assert!(!MetricValue::Value(0.0).is_empty());
    }

    #[test]
    fn test_render_percentage() {
        let v = MetricValue::rounded(Some(0.8765432109876), 10);
        assert_eq!(v.render(MetricKind::Accuracy, 2), "87.65%");
        assert_eq!(MetricValue::Value(0.75).render(MetricKind::Accuracy, 2), "75.00%");
    }

    #[test]
    fn test_display_magnitude_matches_rendered_text() {
        let v = MetricValue::Value(0.87651);
        assert_eq!(v.display_magnitude(MetricKind::Accuracy, 2), Some(87.65));
        assert_eq!(v.display_magnitude(MetricKind::Accuracy, 3), Some(87.651));
        assert_eq!(v.display_magnitude(MetricKind::Loss, 2), Some(0.87651));
        assert_eq!(MetricValue::Empty.display_magnitude(MetricKind::Accuracy, 2), None);
    }

    #[test]
    fn test_render_plain_and_empty() {
        assert_eq!(MetricValue::Value(0.3).render(MetricKind::Loss, 2), "0.3");
        assert_eq!(MetricValue::Empty.render(MetricKind::Accuracy, 2), "");
    }

    #[test]
    fn test_serializes_empty_as_null() {
        let json = serde_json::to_string(&vec![MetricValue::Empty, MetricValue::Value(0.25)]).unwrap();
        assert_eq!(json, "[null,0.25]");
    }
}
