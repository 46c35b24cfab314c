//! Plain-text rendering of an analysis report.

use crate::models::signal::AnalysisReport;

const DISCLAIMER: &str = "(Note: This is a heuristic signal. Test on paper first.)";
const INSUFFICIENT_DATA: &str = "No signal (insufficient data).";

/// Render the report for a chat or terminal audience.
///
/// Total over its inputs: an absent report yields a fixed fallback
/// string, and the disclaimer is always the last line.
pub fn render_report(
    report: Option<&AnalysisReport>,
    pair: &str,
    last_price: f64,
    last_label: &str,
) -> String {
    let report = match report {
        Some(report) => report,
        None => return INSUFFICIENT_DATA.to_string(),
    };

    let mut lines = Vec::new();
    lines.push(format!("{} — {} — price {:.6}", pair, last_label, last_price));

    match report.action {
        Some(action) => lines.push(format!("Signal: {}", action)),
        None => lines.push("Signal: NO TRADE".to_string()),
    }

    if !report.reasons.is_empty() {
        lines.push("Reasons:".to_string());
        for reason in &report.reasons {
            lines.push(format!("- {}", reason));
        }
    }

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}
