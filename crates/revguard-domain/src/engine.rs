use crate::checks;
use crate::model::ParsedLine;
use crate::parse::parse_revinfo;
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use revguard_types::{Finding, RevguardData, Verdict};

/// Parse resolver output and evaluate every line against the policy.
///
/// Findings keep encounter order: by line, and within a line in check order. A malformed line
/// yields exactly one parse finding and is not checked further.
pub fn evaluate(output: &str, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();
    let mut data = RevguardData {
        resolver: cfg.resolver_label.clone(),
        ..RevguardData::default()
    };

    for parsed in parse_revinfo(output, &cfg.self_key) {
        data.entries_total += 1;
        match parsed {
            ParsedLine::Malformed(err) => findings.push(checks::parse_finding(&err, cfg)),
            ParsedLine::SelfEntry { .. } => data.entries_skipped += 1,
            ParsedLine::Entry(entry) if checks::is_package_channel(&entry, cfg) => {
                data.entries_skipped += 1;
            }
            ParsedLine::Entry(entry) => {
                data.entries_checked += 1;
                checks::run_all(&entry, cfg, &mut findings);
            }
        }
    }

    data.findings_total = saturating_count(findings.len());

    DomainReport {
        verdict: Verdict::from_findings(&findings),
        findings,
        data,
    }
}

fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::HASH;
    use revguard_types::ids;

    fn messages(report: &DomainReport) -> Vec<&str> {
        report.findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn self_entry_passes() {
        let out = format!("skia: https://skia.googlesource.com/skia.git@{HASH}\n");
        let report = evaluate(&out, &EffectiveConfig::default());
        assert!(report.findings.is_empty());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.entries_skipped, 1);
    }

    #[test]
    fn wrong_host_and_short_revision_both_fire() {
        let out = "foo: https://github.com/foo/foo.git@deadbeef";
        let report = evaluate(out, &EffectiveConfig::default());
        assert_eq!(
            messages(&report),
            vec![
                "DEPS must be hosted on googlesource.com; https://github.com/foo/foo.git is not allowed. See http://go/new-skia-git-mirror",
                "https://github.com/foo/foo.git: \"deadbeef\" does not look like a commit hash.",
            ]
        );
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.findings_total, 2);
    }

    #[test]
    fn package_channel_is_exempt_regardless_of_revision() {
        let out = "bar: https://chrome-infra-packages.appspot.com/bar@0";
        let report = evaluate(out, &EffectiveConfig::default());
        assert!(report.findings.is_empty());
        assert_eq!(report.data.entries_checked, 0);
    }

    #[test]
    fn malformed_line_yields_single_parse_finding() {
        let report = evaluate("malformed-line-no-colon", &EffectiveConfig::default());
        assert_eq!(
            messages(&report),
            vec!["Failed to parse `gclient revinfo` output; invalid format: malformed-line-no-colon"]
        );
        assert_eq!(report.findings[0].check_id, ids::CHECK_REVINFO_PARSE);
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn malformed_line_does_not_mask_later_violations() {
        let out = format!(
            "skia: https://skia.googlesource.com/skia.git@{HASH}\n\
             garbage\n\
             a: https://example.com/a.git@{HASH}\n"
        );
        let report = evaluate(&out, &EffectiveConfig::default());
        let codes: Vec<_> = report.findings.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![ids::CODE_INVALID_FORMAT, ids::CODE_UNAPPROVED_HOST]
        );
        assert_eq!(report.data.entries_total, 3);
        assert_eq!(report.data.findings_total, 2);
    }

    #[test]
    fn unpinned_self_entry_is_skipped() {
        let out = format!(
            "skia: https://skia.googlesource.com/skia.git\n\
             third_party/externals/zlib: https://chromium.googlesource.com/zlib@{HASH}\n"
        );
        let report = evaluate(&out, &EffectiveConfig::default());
        assert!(report.findings.is_empty());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.entries_skipped, 1);
        assert_eq!(report.data.entries_checked, 1);
    }

    #[test]
    fn custom_self_key_is_honoured() {
        let cfg = EffectiveConfig {
            self_key: "mine".to_string(),
            ..EffectiveConfig::default()
        };
        let report = evaluate("mine: https://github.com/me/mine\nskia: https://github.com/x@main", &cfg);
        let codes: Vec<_> = report.findings.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![ids::CODE_UNAPPROVED_HOST, ids::CODE_MALFORMED_REVISION]
        );
    }

    #[test]
    fn count_saturates_instead_of_truncating() {
        assert_eq!(saturating_count(3), 3);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(saturating_count(u32::MAX as usize + 1), u32::MAX);
    }

    #[test]
    fn empty_output_passes() {
        let report = evaluate("", &EffectiveConfig::default());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.entries_total, 0);
    }
}
