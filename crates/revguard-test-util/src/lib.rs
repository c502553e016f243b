//! Shared test utilities for the revguard workspace.
//!
//! Fake `gclient` executables are plain `/bin/sh` scripts, so the helpers that create them only
//! make sense on unix.

use serde_json::Value;
#[cfg(unix)]
use std::path::Path;
#[cfg(unix)]
use tempfile::TempDir;

/// A full, valid commit hash for building resolver output.
pub const HASH: &str = "0123456789abcdef0123456789abcdef01234567";

/// Write `contents` to `path` and mark it executable.
#[cfg(unix)]
pub fn write_executable(path: &Path, contents: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, contents).expect("write fake executable");
    let mut perms = std::fs::metadata(path)
        .expect("stat fake executable")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod fake executable");
}

/// Create a directory holding a fake `gclient` that prints `output` and exits with `exit_code`.
///
/// Put the returned directory on `PATH` (or pass it as the resolver search path).
#[cfg(unix)]
pub fn fake_gclient_dir(output: &str, exit_code: i32) -> TempDir {
    let dir = TempDir::new().expect("create fake gclient dir");
    let canned = dir.path().join("revinfo.txt");
    std::fs::write(&canned, output).expect("write canned revinfo");
    write_executable(
        &dir.path().join("gclient"),
        &format!(
            "#!/bin/sh\ncat '{}'\nexit {}\n",
            canned.display(),
            exit_code
        ),
    );
    dir
}

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// - `tool.version` at the root of a report envelope becomes `"__VERSION__"`
/// - `started_at` / `finished_at` become `"__TIMESTAMP__"` at any depth
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
