// Prints a metrics comparison for a built-in pair of runs.
// Run with:
//   cargo run -- [options.json]
use metrics_report::{
    print_metrics, Dataset, PreviousHistory, ReconcileRequest, ReportError, ReportOptions,
    StaticEvaluator, StdoutSink, TestInputs, TrainingHistory,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!(error = %e, "Failed to print metrics report");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReportError> {
    let options = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading report options");
            ReportOptions::load_json(&path)?
        }
        None => ReportOptions::default(),
    };

    let (history, previous) = demo_histories();
    let test_set = Dataset {
        inputs: vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
        labels: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0, 0.0]],
    };
    let model = StaticEvaluator::new(&["loss", "accuracy"], &[0.2874, 0.9125]);
    let previous_model = StaticEvaluator::new(&["loss", "accuracy", "lr"], &[0.3312, 0.8875, 0.01]);

    let request = ReconcileRequest::new(&history, 20)
        .with_evaluator(&model)
        .with_test_inputs(TestInputs::Dataset(&test_set))
        .with_previous_history(Some(&previous))
        .with_previous_evaluator(&previous_model)
        .with_previous_epochs(15)
        .with_learning_rate(0.005);

    if let Some(raw) = print_metrics(&request, &options, &mut StdoutSink)? {
        for (name, value) in raw.iter() {
            info!(metric = name, value = ?value, "Current test result");
        }
    }
    Ok(())
}

/// Current run with validation data; previous run that also logged `lr`.
fn demo_histories() -> (TrainingHistory, PreviousHistory) {
    let history = TrainingHistory::new()
        .with_series("loss", vec![0.69, 0.52, 0.41, 0.3350])
        .with_series("accuracy", vec![0.51, 0.74, 0.83, 0.8912])
        .with_series("val_loss", vec![0.70, 0.55, 0.47, 0.3811])
        .with_series("val_accuracy", vec![0.50, 0.71, 0.80, 0.8650]);

    let previous = PreviousHistory::from_columns(vec![
        ("loss", vec![0.68, 0.49, 0.3720]),
        ("accuracy", vec![0.55, 0.76, 0.8790]),
        ("lr", vec![0.01, 0.01, 0.01]),
        ("val_loss", vec![0.69, 0.53, 0.3650]),
        ("val_accuracy", vec![0.52, 0.73, 0.8725]),
    ]);

    (history, previous)
}
