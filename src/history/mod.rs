pub mod training;
pub mod previous;

pub use training::TrainingHistory;
pub use previous::PreviousHistory;

use crate::metrics::name::is_validation_key;

/// Read access shared by the current run's history and the previous run's
/// table: the final-epoch value of a named metric.
pub trait MetricHistory {
    /// Value recorded for `key` in the most recent epoch, if any.
    fn last_value(&self, key: &str) -> Option<f64>;

    /// Every metric name (column) the history knows about.
    fn keys(&self) -> Vec<&str>;

    /// True when any key is validation-scoped (`val_` prefix).
    fn has_validation(&self) -> bool {
        self.keys().into_iter().any(is_validation_key)
    }
}
