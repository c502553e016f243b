use crate::fingerprint::fingerprint_for_entry;
use crate::model::{ParseError, ParseErrorKind};
use crate::policy::EffectiveConfig;
use revguard_types::{Finding, Location, ids};
use serde_json::json;

/// One finding per malformed line; the line is not checked further.
pub fn finding(err: &ParseError, cfg: &EffectiveConfig) -> Finding {
    let expected = match err.kind {
        ParseErrorKind::MissingLabel => "name: value",
        ParseErrorKind::MissingRevision => "repo@revision",
    };

    Finding {
        check_id: ids::CHECK_REVINFO_PARSE.to_string(),
        code: ids::CODE_INVALID_FORMAT.to_string(),
        message: format!(
            "Failed to parse `{}` output; invalid format: {}",
            cfg.resolver_label, err.raw
        ),
        location: Some(Location { line: err.line }),
        help: Some(format!("Expected `{expected}` with exactly one separator.")),
        url: None,
        fingerprint: Some(fingerprint_for_entry(
            ids::CHECK_REVINFO_PARSE,
            ids::CODE_INVALID_FORMAT,
            &err.raw,
            None,
        )),
        data: json!({
            "expected": expected,
            "raw": err.raw,
        }),
    }
}
