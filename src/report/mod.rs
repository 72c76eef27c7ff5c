pub mod options;
pub mod request;
pub mod report;
pub mod reconcile;

pub use options::ReportOptions;
pub use request::ReconcileRequest;
pub use report::{RawMetrics, Reconciliation, Report, ReportRow, ReportSection, RunSummary, SectionKind};
pub use reconcile::reconcile;
