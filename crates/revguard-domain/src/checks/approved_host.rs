use crate::fingerprint::fingerprint_for_entry;
use crate::model::ResolvedEntry;
use crate::policy::EffectiveConfig;
use revguard_types::{Finding, Location, ids};
use serde_json::json;

pub fn run(entry: &ResolvedEntry, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    if entry.repo_url.contains(&cfg.approved_host) {
        return;
    }

    let mut message = format!(
        "DEPS must be hosted on {}; {} is not allowed.",
        cfg.approved_host, entry.repo_url
    );
    if let Some(url) = &cfg.policy_url {
        message.push_str(&format!(" See {url}"));
    }

    out.push(Finding {
        check_id: ids::CHECK_DEPS_APPROVED_HOST.to_string(),
        code: ids::CODE_UNAPPROVED_HOST.to_string(),
        message,
        location: Some(Location { line: entry.line }),
        help: Some(format!(
            "Mirror the repository on {} and point the DEPS entry at the mirror.",
            cfg.approved_host
        )),
        url: cfg.policy_url.clone(),
        fingerprint: Some(fingerprint_for_entry(
            ids::CHECK_DEPS_APPROVED_HOST,
            ids::CODE_UNAPPROVED_HOST,
            &entry.name,
            Some(&entry.repo_url),
        )),
        data: json!({
            "approved_host": cfg.approved_host,
            "dependency": entry.name,
            "repo_url": entry.repo_url,
        }),
    });
}
