use crate::checks::utils::is_commit_hash;
use crate::fingerprint::fingerprint_for_entry;
use crate::model::ResolvedEntry;
use crate::policy::EffectiveConfig;
use revguard_types::{Finding, Location, ids};
use serde_json::json;

pub fn run(entry: &ResolvedEntry, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    if is_commit_hash(&entry.revision) {
        return;
    }

    out.push(Finding {
        check_id: ids::CHECK_DEPS_PINNED_REVISION.to_string(),
        code: ids::CODE_MALFORMED_REVISION.to_string(),
        message: format!(
            "{}: \"{}\" does not look like a commit hash.",
            entry.repo_url, entry.revision
        ),
        location: Some(Location { line: entry.line }),
        help: Some("Pin the dependency to a full 40-character lowercase commit hash.".to_string()),
        url: None,
        fingerprint: Some(fingerprint_for_entry(
            ids::CHECK_DEPS_PINNED_REVISION,
            ids::CODE_MALFORMED_REVISION,
            &entry.name,
            Some(&entry.repo_url),
        )),
        data: json!({
            "dependency": entry.name,
            "repo_url": entry.repo_url,
            "revision": entry.revision,
        }),
    });
}
