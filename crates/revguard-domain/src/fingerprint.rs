use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding about one resolver line.
///
/// Identity fields:
/// - check_id
/// - code
/// - dependency name (or the raw line, for parse findings)
/// - repo url (if known)
pub fn fingerprint_for_entry(
    check_id: &str,
    code: &str,
    subject: &str,
    repo_url: Option<&str>,
) -> String {
    let mut parts = vec![check_id, code, subject];
    if let Some(r) = repo_url {
        parts.push(r);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
