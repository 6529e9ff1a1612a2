//! Report serialization and Markdown rendering.

use archguard_types::{ArchguardReport, CheckStatus};

/// Serialize a report to pretty JSON with a trailing newline.
pub fn serialize_report(report: &ArchguardReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

/// Parse a JSON report produced by [`serialize_report`].
pub fn parse_report_json(input: &str) -> anyhow::Result<ArchguardReport> {
    let report: ArchguardReport = serde_json::from_str(input)?;
    Ok(report)
}

pub fn render_markdown(report: &ArchguardReport) -> String {
    let mut out = String::new();

    out.push_str("# Archguard report\n\n");
    let status = match report.status {
        CheckStatus::Pass => "PASS",
        CheckStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Status: **{}**\n- Detail: {}\n- Feature: `{}`\n\n",
        status, report.detail, report.data.feature
    ));

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");
    for v in &report.violations {
        out.push_str(&format!(
            "- `{}`:{} — `{}` matched `{}`\n",
            v.file, v.line, v.pattern, v.text
        ));
    }

    out
}
