use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures that make validation meaningless. None of these are retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("`{program}` not found on PATH")]
    NotFound { program: String },

    #[error("failed to spawn `{command}` in {cwd}")]
    Spawn {
        command: String,
        cwd: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    NonZeroExit {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("resolver output is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("resolver produced no output")]
    EmptyOutput,
}
