use crate::model::RevguardConfigV1;
use revguard_domain::policy::EffectiveConfig;

pub const DEFAULT_PROGRAM: &str = "gclient";
pub const DEFAULT_PYTHON: &str = "python3";

/// How to invoke the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverCommand {
    pub program: String,
    pub args: Vec<String>,
    pub python: String,
}

impl ResolverCommand {
    /// Human-readable command, e.g. `gclient revinfo`.
    pub fn label(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ResolverCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec!["revinfo".to_string()],
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub resolver: ResolverCommand,
}

pub fn resolve_config(cfg: RevguardConfigV1) -> anyhow::Result<ResolvedConfig> {
    let mut resolver = ResolverCommand::default();
    if let Some(program) = cfg.resolver.program {
        anyhow::ensure!(!program.trim().is_empty(), "resolver.program must not be empty");
        resolver.program = program;
    }
    if let Some(args) = cfg.resolver.args {
        resolver.args = args;
    }
    if let Some(python) = cfg.resolver.python {
        resolver.python = python;
    }

    let mut effective = EffectiveConfig {
        resolver_label: resolver.label(),
        ..EffectiveConfig::default()
    };

    if let Some(self_key) = cfg.self_key {
        anyhow::ensure!(!self_key.is_empty(), "self_key must not be empty");
        effective.self_key = self_key;
    }
    if let Some(host) = cfg.approved_host {
        anyhow::ensure!(!host.is_empty(), "approved_host must not be empty");
        effective.approved_host = host;
    }
    if let Some(marker) = cfg.package_marker {
        effective.package_marker = marker;
    }
    if let Some(url) = cfg.policy_url {
        effective.policy_url = (!url.is_empty()).then_some(url);
    }

    Ok(ResolvedConfig {
        effective,
        resolver,
    })
}
