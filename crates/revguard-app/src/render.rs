//! Plain-text rendering for the stderr gate output.

use revguard_types::RevguardReport;

/// First line printed when any finding exists.
pub const BANNER: &str = "Found problems in DEPS:";

/// Render the banner followed by one finding message per line, in report order.
///
/// Returns `None` for a report without findings: a passing gate prints nothing. Every finding
/// fails the gate, so the banner appears exactly when the exit code is non-zero.
pub fn render_problems(report: &RevguardReport) -> Option<String> {
    if report.findings.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    for f in &report.findings {
        out.push_str(&f.message);
        out.push('\n');
    }
    Some(out)
}
