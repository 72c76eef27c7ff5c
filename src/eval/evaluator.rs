use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::eval::evaluation::Evaluation;

/// A held-out test set with inputs and labels kept together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

/// What a model is evaluated against: either a dataset handle or separate
/// input and label slices.
#[derive(Debug, Clone, Copy)]
pub enum TestInputs<'a> {
    Dataset(&'a Dataset),
    Split {
        inputs: &'a [Vec<f64>],
        labels: &'a [Vec<f64>],
    },
}

impl<'a> TestInputs<'a> {
    pub fn inputs(&self) -> &'a [Vec<f64>] {
        match *self {
            TestInputs::Dataset(ds) => &ds.inputs,
            TestInputs::Split { inputs, .. } => inputs,
        }
    }

    pub fn labels(&self) -> &'a [Vec<f64>] {
        match *self {
            TestInputs::Dataset(ds) => &ds.labels,
            TestInputs::Split { labels, .. } => labels,
        }
    }
}

/// A trained model that can score a test set.
///
/// `metric_names` lists what `evaluate` produces, in order; the report uses
/// it to decide which metric rows to show when no explicit list is given.
pub trait Evaluator {
    fn metric_names(&self) -> Vec<String>;

    /// Runs one evaluation pass.
    fn evaluate(&self, inputs: &TestInputs<'_>) -> Evaluation;
}

/// An evaluator that replays recorded results.
///
/// Useful when the model itself is not at hand (a run restored from disk) and
/// in tests. Counts how many passes were requested.
#[derive(Debug, Clone)]
pub struct StaticEvaluator {
    names: Vec<String>,
    results: Evaluation,
    calls: Cell<usize>,
}

impl StaticEvaluator {
    /// `names` and `values` are positional, like a model's declared metric
    /// names and its evaluation output.
    pub fn new<S: AsRef<str>>(names: &[S], values: &[f64]) -> Self {
        StaticEvaluator {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
            results: Evaluation::from_positional(names, values),
            calls: Cell::new(0),
        }
    }

    /// Number of `evaluate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Evaluator for StaticEvaluator {
    fn metric_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn evaluate(&self, _inputs: &TestInputs<'_>) -> Evaluation {
        self.calls.set(self.calls.get() + 1);
        self.results.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_accessors() {
        let ds = Dataset {
            inputs: vec![vec![0.0, 1.0]],
            labels: vec![vec![1.0]],
        };
        let whole = TestInputs::Dataset(&ds);
        let split = TestInputs::Split { inputs: &ds.inputs, labels: &ds.labels };
        assert_eq!(whole.inputs(), split.inputs());
        assert_eq!(whole.labels().len(), 1);
    }

    #[test]
    fn test_static_evaluator_replays_and_counts() {
        let ds = Dataset::default();
        let eval = StaticEvaluator::new(&["loss", "accuracy"], &[0.2, 0.95]);
        assert_eq!(eval.metric_names(), vec!["loss", "accuracy"]);
        let result = eval.evaluate(&TestInputs::Dataset(&ds));
        assert_eq!(result.get("accuracy"), Some(0.95));
        assert_eq!(eval.calls(), 1);
    }
}
