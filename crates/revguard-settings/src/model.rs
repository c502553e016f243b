use serde::{Deserialize, Serialize};

/// `revguard.toml` schema v1.
///
/// Every key is optional. The file belongs to whoever runs the gate, not to the repository
/// being checked, so it can retarget the policy but never relax it per dependency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevguardConfigV1 {
    /// Optional schema string for tooling (`revguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Manifest key of the repository's own checkout (default `skia`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_key: Option<String>,

    /// Substring required in every repo URL (default `googlesource.com`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_host: Option<String>,

    /// Substring identifying package-channel URLs (default `chrome-infra-packages`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_marker: Option<String>,

    /// Link appended to hosting findings. An empty string disables the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_url: Option<String>,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Program name looked up on `PATH`, or a path (default `gclient`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments selecting the report mode (default `["revinfo"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Interpreter used when a sibling `<program>.py` exists (default `python3`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}
