use crate::model::ResolvedEntry;

pub const HASH: &str = "0123456789abcdef0123456789abcdef01234567";

pub fn entry(name: &str, repo_url: &str, revision: &str) -> ResolvedEntry {
    ResolvedEntry {
        name: name.to_string(),
        repo_url: repo_url.to_string(),
        revision: revision.to_string(),
        line: 1,
    }
}
