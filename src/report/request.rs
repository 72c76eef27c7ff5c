use crate::eval::{Evaluator, TestInputs};
use crate::history::{PreviousHistory, TrainingHistory};

/// Everything a report is built from.
///
/// Only the current history and epoch count are required. The previous run,
/// test inputs and evaluators are all optional; whatever is missing turns into
/// blank cells.
///
/// # Fields
/// - `history`: the current run's per-epoch metrics
/// - `epochs`: epochs run in the current session
/// - `evaluator`: current model; supplies metric names and test metrics
/// - `test_inputs`: held-out data for the test section
/// - `previous_history`: previous run's per-epoch table
/// - `previous_evaluator`: previous model, evaluated on the same test inputs
/// - `previous_epochs`: epoch count shown for the previous run
/// - `metric_names`: explicit metric list; takes precedence over the evaluator's
/// - `learning_rate`: current learning rate; falls back to the history's `lr`
pub struct ReconcileRequest<'a> {
    pub history: &'a TrainingHistory,
    pub epochs: usize,
    pub evaluator: Option<&'a dyn Evaluator>,
    pub test_inputs: Option<TestInputs<'a>>,
    pub previous_history: Option<&'a PreviousHistory>,
    pub previous_evaluator: Option<&'a dyn Evaluator>,
    pub previous_epochs: Option<usize>,
    pub metric_names: Option<Vec<String>>,
    pub learning_rate: Option<f64>,
}

impl<'a> ReconcileRequest<'a> {
    /// Creates a request with no previous run, no test data and no evaluator.
    pub fn new(history: &'a TrainingHistory, epochs: usize) -> Self {
        ReconcileRequest {
            history,
            epochs,
            evaluator: None,
            test_inputs: None,
            previous_history: None,
            previous_evaluator: None,
            previous_epochs: None,
            metric_names: None,
            learning_rate: None,
        }
    }

    pub fn with_evaluator(mut self, evaluator: &'a dyn Evaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_test_inputs(mut self, inputs: TestInputs<'a>) -> Self {
        self.test_inputs = Some(inputs);
        self
    }

    /// Sets the previous run's table. `None` is accepted so a failed load can
    /// be passed straight through.
    pub fn with_previous_history(mut self, history: Option<&'a PreviousHistory>) -> Self {
        self.previous_history = history;
        self
    }

    pub fn with_previous_evaluator(mut self, evaluator: &'a dyn Evaluator) -> Self {
        self.previous_evaluator = Some(evaluator);
        self
    }

    pub fn with_previous_epochs(mut self, epochs: usize) -> Self {
        self.previous_epochs = Some(epochs);
        self
    }

    pub fn with_metric_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.metric_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = Some(lr);
        self
    }
}
