pub mod html;
pub mod sink;

pub use html::render_html;
pub use sink::{BufferSink, DisplayEntry, DisplaySink, StdoutSink};

use tracing::debug;

use crate::error::ReportError;
use crate::report::{reconcile, RawMetrics, ReconcileRequest, ReportOptions};

/// Reconciles, renders and displays a metrics report, framed by separators.
///
/// Returns the raw current-run evaluation results when
/// `options.return_metrics` is set.
///
/// # Errors
/// Propagates `ReportError::Config` from `reconcile`; only the leading
/// separator has been written at that point.
pub fn print_metrics(
    request: &ReconcileRequest<'_>,
    options: &ReportOptions,
    sink: &mut dyn DisplaySink,
) -> Result<Option<RawMetrics>, ReportError> {
    sink.separator();
    let reconciliation = reconcile(request, options)?;
    let html = render_html(&reconciliation.report, options);
    debug!(rows = reconciliation.report.training.rows.len(), bytes = html.len(), "Rendered metrics table");
    sink.html(&html);
    sink.separator();

    Ok(options.return_metrics.then_some(reconciliation.raw_metrics))
}
