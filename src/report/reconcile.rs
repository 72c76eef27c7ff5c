use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::ReportError;
use crate::eval::{Evaluation, Evaluator, TestInputs};
use crate::history::{MetricHistory, PreviousHistory};
use crate::metrics::{is_validation_key, MetricValue};
use crate::report::options::ReportOptions;
use crate::report::report::{
    RawMetrics, Reconciliation, Report, ReportRow, ReportSection, RunSummary, SectionKind,
};
use crate::report::request::ReconcileRequest;

/// History column holding the learning rate.
const LR_KEY: &str = "lr";

type MetricSet = HashMap<String, MetricValue>;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Builds the previous-vs-current comparison for one training session.
///
/// Steps:
/// 1. resolve the metric list (explicit names, else the current evaluator's);
/// 2. evaluate the previous and current models once each, if test inputs exist;
/// 3. extract final-epoch values per section for both runs;
/// 4. append metrics only the previous run logged, blank on the current side;
/// 5. key-align both sides of every section and compute row styles.
///
/// # Errors
/// `ReportError::Config` when there is neither an explicit metric list nor a
/// current evaluator. Every other gap (no previous run, no test inputs, no
/// validation data, metrics missing on one side) becomes an empty cell.
pub fn reconcile(
    request: &ReconcileRequest<'_>,
    options: &ReportOptions,
) -> Result<Reconciliation, ReportError> {
    let resolved = resolve_metric_names(request)?;
    let validation_present = request.history.has_validation();
    debug!(metrics = ?resolved, validation_present, "Resolved report metrics");

    let test_inputs = request.test_inputs.as_ref();
    let previous = RunSources {
        history: request.previous_history.map(|h| h as &dyn MetricHistory),
        evaluation: run_evaluation("previous", request.previous_evaluator, test_inputs),
    };
    let current = RunSources {
        history: Some(request.history as &dyn MetricHistory),
        evaluation: run_evaluation("current", request.evaluator, test_inputs),
    };

    let legacy = legacy_metrics(request.previous_history, &resolved);
    let mut names = resolved.clone();
    names.extend(legacy.iter().cloned());

    let digits = options.value_precision;
    let build = |section: SectionKind| {
        let mut sets = SectionSets::default();
        for name in &resolved {
            sets.insert_previous(name, previous.value(section, name, validation_present, digits));
            sets.insert_current(name, current.value(section, name, validation_present, digits));
        }
        // Current side of a legacy metric stays blank.
        for name in &legacy {
            sets.insert_previous(name, previous.value(section, name, validation_present, digits));
        }
        sets.align(&names);
        ReportSection { kind: section, rows: sets.into_rows(&names, options.percent_precision) }
    };

    let report = Report {
        previous: RunSummary::new(
            request.previous_epochs,
            request.previous_history.and_then(|h| h.last_value(LR_KEY)),
        ),
        current: RunSummary::new(
            Some(request.epochs),
            request.learning_rate.or_else(|| request.history.last_value(LR_KEY)),
        ),
        training: build(SectionKind::Training),
        validation: build(SectionKind::Validation),
        test: build(SectionKind::Test),
    };

    // Legacy metrics are deliberately left out of the raw companion.
    let raw_metrics = RawMetrics::new(
        resolved.iter()
            .map(|name| (name.clone(), current.evaluation.as_ref().and_then(|e| e.get(name))))
            .collect(),
    );

    Ok(Reconciliation { report, raw_metrics })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Where one run's final-epoch values come from.
struct RunSources<'a> {
    history: Option<&'a dyn MetricHistory>,
    evaluation: Option<Evaluation>,
}

impl RunSources<'_> {
    /// Rounded final value of `name` in `section`; `None` when this run has
    /// no such value.
    fn value(
        &self,
        section: SectionKind,
        name: &str,
        validation_present: bool,
        digits: u32,
    ) -> Option<MetricValue> {
        let raw = match section {
            SectionKind::Training => self.history?.last_value(name),
            SectionKind::Validation if validation_present => {
                self.history?.last_value(&section.history_key(name))
            }
            SectionKind::Validation => None,
            SectionKind::Test => self.evaluation.as_ref()?.get(name),
        };
        raw.map(|v| MetricValue::rounded(Some(v), digits))
    }
}

/// Previous and current values of one section, keyed by metric name.
#[derive(Default)]
struct SectionSets {
    previous: MetricSet,
    current: MetricSet,
}

impl SectionSets {
    fn insert_previous(&mut self, name: &str, value: Option<MetricValue>) {
        if let Some(v) = value {
            self.previous.insert(name.to_string(), v);
        }
    }

    fn insert_current(&mut self, name: &str, value: Option<MetricValue>) {
        if let Some(v) = value {
            self.current.insert(name.to_string(), v);
        }
    }

    /// Backfills `Empty` so both sides hold every key either side has plus
    /// every name in `names`.
    fn align(&mut self, names: &[String]) {
        let keys: Vec<String> = self.previous.keys()
            .chain(self.current.keys())
            .chain(names.iter())
            .cloned()
            .collect();
        for key in keys {
            self.previous.entry(key.clone()).or_default();
            self.current.entry(key).or_default();
        }
    }

    fn into_rows(self, names: &[String], percent_precision: usize) -> Vec<ReportRow> {
        names.iter()
            .map(|name| {
                let previous = self.previous.get(name).copied().unwrap_or_default();
                let current  = self.current.get(name).copied().unwrap_or_default();
                ReportRow::new(name, previous, current, percent_precision)
            })
            .collect()
    }
}

/// Explicit names win; otherwise the current evaluator's declared names.
/// Duplicates are dropped so each metric gets exactly one row.
fn resolve_metric_names(request: &ReconcileRequest<'_>) -> Result<Vec<String>, ReportError> {
    let names = match (&request.metric_names, request.evaluator) {
        (Some(names), _) => names.clone(),
        (None, Some(evaluator)) => evaluator.metric_names(),
        (None, None) => {
            return Err(ReportError::config(
                "no way to determine metric names: pass metric names or an evaluator",
            ))
        }
    };

    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    Ok(unique)
}

/// Runs one evaluation pass when both a model and test inputs are present.
fn run_evaluation(
    run: &str,
    evaluator: Option<&dyn Evaluator>,
    inputs: Option<&TestInputs<'_>>,
) -> Option<Evaluation> {
    let (evaluator, inputs) = (evaluator?, inputs?);
    let evaluation = evaluator.evaluate(inputs);
    debug!(run, samples = inputs.inputs().len(), metrics = evaluation.len(), "Evaluated test inputs");
    Some(evaluation)
}

/// Columns the previous run logged that the current metric list lacks,
/// in column order. Validation columns ride along with their base metric.
fn legacy_metrics(previous: Option<&PreviousHistory>, resolved: &[String]) -> Vec<String> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut legacy: Vec<String> = Vec::new();
    for column in previous.columns() {
        if is_validation_key(column) || resolved.contains(column) || legacy.contains(column) {
            continue;
        }
        info!(metric = %column, "Previous run logged a metric the current run does not declare");
        legacy.push(column.clone());
    }
    legacy
}
