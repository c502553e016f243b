//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ResolverConfig, RevguardConfigV1};
pub use resolve::{ResolvedConfig, ResolverCommand};

/// Parse `revguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RevguardConfigV1> {
    let cfg: RevguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy and resolver command.
pub fn resolve_config(cfg: RevguardConfigV1) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg)
}
