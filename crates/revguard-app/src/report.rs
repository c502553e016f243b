use anyhow::Context;
use camino::Utf8Path;
use revguard_types::{
    Finding, ReportEnvelope, RevguardData, RevguardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict,
    ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<RevguardReport> {
    let report: RevguardReport = serde_json::from_str(text).context("parse report json")?;
    anyhow::ensure!(
        report.schema == SCHEMA_REPORT_V1,
        "unknown report schema: {}",
        report.schema
    );
    Ok(report)
}

pub fn serialize_report(report: &RevguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Write the JSON report, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &RevguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

/// A failing report carrying a single `tool.runtime` finding, for fatal errors.
pub fn runtime_error_report(message: &str) -> RevguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "revguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("revguard could not resolve DEPS; fix the error and re-run.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: RevguardData {
            findings_total: 1,
            ..RevguardData::default()
        },
    }
}
