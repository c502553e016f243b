pub const DEFAULT_RESOLVER_LABEL: &str = "gclient revinfo";
pub const DEFAULT_SELF_KEY: &str = "skia";
pub const DEFAULT_APPROVED_HOST: &str = "googlesource.com";
pub const DEFAULT_PACKAGE_MARKER: &str = "chrome-infra-packages";
pub const DEFAULT_POLICY_URL: &str = "http://go/new-skia-git-mirror";

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    /// Shown in parse findings, e.g. ``Failed to parse `gclient revinfo` output``.
    pub resolver_label: String,
    /// Manifest key of the repository's own checkout; never checked.
    pub self_key: String,
    /// Substring every non-exempt repo URL must contain.
    pub approved_host: String,
    /// Substring marking package-channel URLs, which are exempt from all checks.
    pub package_marker: String,
    pub policy_url: Option<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            resolver_label: DEFAULT_RESOLVER_LABEL.to_string(),
            self_key: DEFAULT_SELF_KEY.to_string(),
            approved_host: DEFAULT_APPROVED_HOST.to_string(),
            package_marker: DEFAULT_PACKAGE_MARKER.to_string(),
            policy_url: Some(DEFAULT_POLICY_URL.to_string()),
        }
    }
}
