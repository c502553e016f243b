use crate::model::{ParseError, ResolvedEntry};
use crate::policy::EffectiveConfig;
use revguard_types::Finding;

mod approved_host;
mod invalid_format;
mod pinned_revision;
mod utils;


pub use utils::is_commit_hash;

/// Package-channel URLs carry version tags rather than git revisions and are never checked.
/// An empty marker exempts nothing.
pub fn is_package_channel(entry: &ResolvedEntry, cfg: &EffectiveConfig) -> bool {
    !cfg.package_marker.is_empty() && entry.repo_url.contains(&cfg.package_marker)
}

/// Run every pin check against one entry. Order of pushed findings is stable.
pub fn run_all(entry: &ResolvedEntry, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    approved_host::run(entry, cfg, out);
    pinned_revision::run(entry, cfg, out);
}

pub fn parse_finding(err: &ParseError, cfg: &EffectiveConfig) -> Finding {
    invalid_format::finding(err, cfg)
}
