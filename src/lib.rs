pub mod error;
pub mod metrics;
pub mod history;
pub mod eval;
pub mod report;
pub mod render;

// Convenience re-exports
pub use error::ReportError;
pub use metrics::{ComparisonStyle, MetricKind, MetricValue};
pub use history::{MetricHistory, PreviousHistory, TrainingHistory};
pub use eval::{Dataset, Evaluation, Evaluator, StaticEvaluator, TestInputs};
pub use report::{reconcile, RawMetrics, Reconciliation, ReconcileRequest, Report, ReportOptions, ReportRow, SectionKind};
pub use render::{print_metrics, render_html, BufferSink, DisplaySink, StdoutSink};
