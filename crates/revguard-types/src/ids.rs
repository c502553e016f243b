//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_REVINFO_PARSE: &str = "revinfo.parse";
pub const CHECK_DEPS_APPROVED_HOST: &str = "deps.approved_host";
pub const CHECK_DEPS_PINNED_REVISION: &str = "deps.pinned_revision";

// Codes: revinfo.parse
pub const CODE_INVALID_FORMAT: &str = "invalid_format";

// Codes: deps.approved_host
pub const CODE_UNAPPROVED_HOST: &str = "unapproved_host";

// Codes: deps.pinned_revision
pub const CODE_MALFORMED_REVISION: &str = "malformed_revision";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
