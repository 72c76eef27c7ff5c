//! HTML table renderer for a reconciled metrics report.
//!
//! One table, three stacked sections. Each section opens with a header cell
//! spanning its rows; the Training section additionally carries the Epochs
//! and LR rows. Only the current-value cell is styled, green when the metric
//! improved and tomato when it regressed.

use crate::report::{Report, ReportOptions, ReportRow, ReportSection, RunSummary, SectionKind};

const BORDER: &str = "border: 1px solid;";
const BORDER_TOP: &str = " style='border-top: 1px solid;'";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Renders `report` as a self-contained HTML table.
pub fn render_html(report: &Report, options: &ReportOptions) -> String {
    let mut html = format!("<table style='{BORDER}'>\n");
    html.push_str("<thead style='border-bottom: 1px solid;'>\n");
    html.push_str("  <tr><th></th><th></th><th>Prev</th><th>Current</th></tr>\n");
    html.push_str("</thead>\n<tbody>\n");

    for section in report.sections() {
        html.push_str(&build_section(report, section, options));
    }

    html.push_str("</tbody></table>");
    html
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn build_section(report: &Report, section: &ReportSection, options: &ReportOptions) -> String {
    let n = section.rows.len();
    match section.kind {
        SectionKind::Training => {
            // Header row + Epochs + LR + one per metric.
            let mut html = format!(
                "  <tr><td rowspan={} style='{BORDER}'>Training</td></tr>\n\
                 \x20 <tr{BORDER_TOP}><td>Epochs</td><td>{}</td><td>{}</td></tr>\n\
                 \x20 <tr><td>LR</td><td>{}</td><td>{}</td></tr>\n",
                n + 3,
                epochs_text(&report.previous),
                epochs_text(&report.current),
                lr_text(&report.previous, options),
                lr_text(&report.current, options),
            );
            for row in &section.rows {
                html.push_str(&build_row(row, "", options));
            }
            html
        }
        kind => {
            let mut html = format!(
                "  <tr{BORDER_TOP}><td rowspan={} style='{BORDER}'>{}</td></tr>\n",
                n + 1,
                kind.title(),
            );
            for (i, row) in section.rows.iter().enumerate() {
                html.push_str(&build_row(row, if i == 0 { BORDER_TOP } else { "" }, options));
            }
            html
        }
    }
}

fn build_row(row: &ReportRow, tr_attr: &str, options: &ReportOptions) -> String {
    let style = row.style.css()
        .map(|css| format!(" style='{css}'"))
        .unwrap_or_default();
    format!(
        "  <tr{}><td>{}</td><td>{}</td><td{}>{}</td></tr>\n",
        tr_attr,
        escape(&row.label),
        row.previous.render(row.kind, options.percent_precision),
        style,
        row.current.render(row.kind, options.percent_precision),
    )
}

fn epochs_text(run: &RunSummary) -> String {
    run.epochs.map(|e| e.to_string()).unwrap_or_default()
}

fn lr_text(run: &RunSummary, options: &ReportOptions) -> String {
    run.learning_rate
        .map(|lr| format!("{:.*}", options.value_precision as usize, lr))
        .unwrap_or_default()
}

/// Minimal escaping for text placed inside a table cell.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
