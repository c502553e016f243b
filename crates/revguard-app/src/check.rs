//! The `check` use case: resolve DEPS, evaluate policy, and produce a report.

use anyhow::Context;
use revguard_domain::policy::EffectiveConfig;
use revguard_resolver::Resolver;
use revguard_settings::ResolvedConfig;
use revguard_types::{ReportEnvelope, RevguardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: RevguardReport,
}

/// Parse and resolve config text. Empty text means every default applies.
pub fn load_config(config_text: &str) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        revguard_settings::RevguardConfigV1::default()
    } else {
        revguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    revguard_settings::resolve_config(cfg).context("resolve config")
}

/// Run the check use case. Resolver failures are fatal and returned as errors; malformed lines
/// and policy breaches become findings.
pub fn run_check(resolver: &dyn Resolver, effective: &EffectiveConfig) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let output = resolver
        .resolve()
        .with_context(|| format!("run `{}`", effective.resolver_label))?;

    let domain_report = revguard_domain::evaluate(&output, effective);
    let revguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
    } = domain_report;

    info!(
        entries = data.entries_total,
        checked = data.entries_checked,
        skipped = data.entries_skipped,
        findings = data.findings_total,
        "evaluated DEPS pins"
    );
    for f in &findings {
        debug!(check_id = %f.check_id, code = %f.code, "finding");
    }

    let finished_at = OffsetDateTime::now_utc();

    Ok(CheckOutput {
        report: ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "revguard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            started_at,
            finished_at,
            verdict,
            findings,
            data,
        },
    })
}

/// Map verdict to exit code: 0 = pass, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
