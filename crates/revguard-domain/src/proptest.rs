//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - one finding per failed rule, per line
//! - parse failures short-circuiting the pin checks
//! - the self entry never producing findings
//! - determinism of the ordered finding list

use crate::engine::evaluate;
use crate::policy::EffectiveConfig;
use proptest::prelude::*;
use revguard_types::ids;

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_/-]{0,31}")
        .unwrap()
        .prop_filter("must not be the self key", |s| s != "skia")
}

fn arb_hash() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{40}").unwrap()
}

/// Revisions that are never a full commit hash.
fn arb_bad_revision() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[0-9a-f]{1,39}").unwrap(),
        prop::string::string_regex("[0-9a-f]{41,50}").unwrap(),
        prop::string::string_regex("[0-9A-F]{40}")
            .unwrap()
            .prop_filter("needs an uppercase letter", |s| s
                .bytes()
                .any(|b| b.is_ascii_uppercase())),
        prop::string::string_regex("[a-z]{1,12}").unwrap(),
    ]
}

fn arb_approved_repo() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,10}")
        .unwrap()
        .prop_map(|p| format!("https://{p}.googlesource.com/{p}.git"))
}

fn arb_foreign_repo() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,10}")
        .unwrap()
        .prop_map(|p| format!("https://github.com/{p}/{p}.git"))
}

/// Lines without any ": " separator.
fn arb_unlabelled_line() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@/._-]{0,40}").unwrap()
}

proptest! {
    #[test]
    fn conforming_lines_produce_no_findings(
        name in arb_name(),
        repo in arb_approved_repo(),
        rev in arb_hash(),
    ) {
        let report = evaluate(&format!("{name}: {repo}@{rev}"), &EffectiveConfig::default());
        prop_assert!(report.findings.is_empty());
    }

    #[test]
    fn foreign_host_produces_exactly_one_host_finding(
        name in arb_name(),
        repo in arb_foreign_repo(),
        rev in arb_hash(),
    ) {
        let report = evaluate(&format!("{name}: {repo}@{rev}"), &EffectiveConfig::default());
        prop_assert_eq!(report.findings.len(), 1);
        prop_assert_eq!(&report.findings[0].code, ids::CODE_UNAPPROVED_HOST);
        prop_assert!(report.findings[0].message.contains(&repo));
    }

    #[test]
    fn bad_revision_produces_exactly_one_revision_finding(
        name in arb_name(),
        repo in arb_approved_repo(),
        rev in arb_bad_revision(),
    ) {
        let report = evaluate(&format!("{name}: {repo}@{rev}"), &EffectiveConfig::default());
        prop_assert_eq!(report.findings.len(), 1);
        prop_assert_eq!(&report.findings[0].code, ids::CODE_MALFORMED_REVISION);
        let expected = format!("{repo}: \"{rev}\"");
        prop_assert!(report.findings[0].message.starts_with(&expected));
    }

    #[test]
    fn unlabelled_lines_produce_one_parse_finding(line in arb_unlabelled_line()) {
        prop_assume!(!line.trim().is_empty());
        let report = evaluate(&line, &EffectiveConfig::default());
        prop_assert_eq!(report.findings.len(), 1);
        prop_assert_eq!(&report.findings[0].code, ids::CODE_INVALID_FORMAT);
        prop_assert!(report.findings[0].message.ends_with(line.as_str()));
    }

    #[test]
    fn value_without_single_at_produces_one_parse_finding(
        name in arb_name(),
        repo in arb_foreign_repo(),
        ats in prop_oneof![Just(0usize), 2usize..4],
    ) {
        let value = format!("{repo}{}", "@x".repeat(ats));
        let report = evaluate(&format!("{name}: {value}"), &EffectiveConfig::default());
        prop_assert_eq!(report.findings.len(), 1);
        prop_assert_eq!(&report.findings[0].code, ids::CODE_INVALID_FORMAT);
    }

    #[test]
    fn package_channel_lines_are_always_exempt(
        name in arb_name(),
        rev in "[ -?A-~]{0,20}",
    ) {
        prop_assume!(!rev.contains('@') && !rev.contains(": "));
        let line = format!("{name}: https://chrome-infra-packages.appspot.com/{name}@{rev}");
        let report = evaluate(&line, &EffectiveConfig::default());
        prop_assert!(report.findings.is_empty());
    }

    #[test]
    fn self_entry_is_skipped_with_or_without_revision(value in "[a-zA-Z0-9@/:._-]{1,40}") {
        let report = evaluate(&format!("skia: {value}"), &EffectiveConfig::default());
        prop_assert!(report.findings.is_empty());
        prop_assert_eq!(report.data.entries_skipped, 1);
    }

    #[test]
    fn evaluation_is_idempotent(
        lines in prop::collection::vec(
            prop_oneof![
                (arb_name(), arb_foreign_repo(), arb_bad_revision())
                    .prop_map(|(n, r, v)| format!("{n}: {r}@{v}")),
                (arb_name(), arb_approved_repo(), arb_hash())
                    .prop_map(|(n, r, v)| format!("{n}: {r}@{v}")),
                arb_unlabelled_line(),
            ],
            0..12,
        )
    ) {
        let output = lines.join("\n");
        let cfg = EffectiveConfig::default();
        let first = evaluate(&output, &cfg);
        let second = evaluate(&output, &cfg);
        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.verdict, second.verdict);
    }
}
