use crate::error::ResolveError;
use crate::search::find_on_path;
use crate::{Resolver, check_usable};
use camino::{Utf8Path, Utf8PathBuf};
use revguard_settings::ResolverCommand;
use std::ffi::OsString;
use std::process::Command;
use tracing::{debug, info};

/// Runs the configured resolver (by default `gclient revinfo`) in the repository root.
///
/// When a `gclient.py` sits next to the located `gclient` wrapper, the script is run directly
/// with the configured interpreter so the wrapper's depot_tools self-update is skipped. The
/// interpreter is located on the same search path as the wrapper.
#[derive(Clone, Debug)]
pub struct GclientResolver {
    repo_root: Utf8PathBuf,
    command: ResolverCommand,
    search_path: Option<OsString>,
}

/// The concrete process to spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl GclientResolver {
    pub fn new(repo_root: &Utf8Path, command: ResolverCommand) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            command,
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Replace the `PATH` used to locate the resolver.
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    fn locate(&self, program: &str) -> Result<Utf8PathBuf, ResolveError> {
        find_on_path(program, self.search_path.as_deref(), &self.repo_root).ok_or_else(|| {
            ResolveError::NotFound {
                program: program.to_string(),
            }
        })
    }

    pub fn invocation(&self) -> Result<Invocation, ResolveError> {
        let located = self.locate(&self.command.program)?;
        debug!(path = %located, "located resolver");

        if let Some(script) = sibling_script(&located) {
            let python = self.locate(&self.command.python)?;
            debug!(script = %script, python = %python, "running resolver script directly");
            let args = std::iter::once(script.into_string())
                .chain(self.command.args.iter().cloned())
                .collect();
            return Ok(Invocation {
                program: python.into_string(),
                args,
            });
        }

        Ok(Invocation {
            program: located.into_string(),
            args: self.command.args.clone(),
        })
    }
}

impl Resolver for GclientResolver {
    fn resolve(&self) -> Result<String, ResolveError> {
        let invocation = self.invocation()?;
        let command = std::iter::once(invocation.program.as_str())
            .chain(invocation.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        info!(%command, cwd = %self.repo_root, "running resolver");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|source| ResolveError::Spawn {
                command: command.clone(),
                cwd: self.repo_root.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolveError::NonZeroExit {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        debug!(bytes = stdout.len(), "captured resolver output");
        check_usable(stdout)
    }
}

/// `gclient` / `gclient.bat` -> `gclient.py` in the same directory, if present.
fn sibling_script(located: &Utf8Path) -> Option<Utf8PathBuf> {
    let stem = located.file_stem()?;
    let script = located.with_file_name(format!("{stem}.py"));
    (script != located && script.is_file()).then_some(script)
}
