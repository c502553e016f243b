use camino::{Utf8Path, Utf8PathBuf};
use std::ffi::OsStr;

#[cfg(windows)]
const EXTENSIONS: &[&str] = &["", ".bat", ".cmd", ".exe"];
#[cfg(not(windows))]
const EXTENSIONS: &[&str] = &[""];

/// Locate `program` the way a shell would.
///
/// A program containing a path separator is taken as a path (relative to `cwd`). Otherwise each
/// directory of `search_path` (a `PATH`-style list) is tried in order.
pub fn find_on_path(program: &str, search_path: Option<&OsStr>, cwd: &Utf8Path) -> Option<Utf8PathBuf> {
    if program.contains('/') || program.contains(std::path::MAIN_SEPARATOR) {
        let candidate = cwd.join(program);
        return is_executable(&candidate).then_some(candidate);
    }

    let search_path = search_path?;
    std::env::split_paths(search_path)
        .filter_map(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .filter(|dir| !dir.as_str().is_empty())
        .flat_map(|dir| {
            EXTENSIONS
                .iter()
                .map(move |ext| dir.join(format!("{program}{ext}")))
        })
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Utf8Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Utf8Path) -> bool {
    path.is_file()
}
