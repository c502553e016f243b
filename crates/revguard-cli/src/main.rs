//! CLI entry point for revguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `revguard-app` crate.
//!
//! Bare `revguard` is the gate: silent with exit 0 when every DEPS pin is acceptable, otherwise
//! the problems on stderr and exit 1. Nothing in the checked repository configures it; a policy
//! file is only read when the caller passes `--config`.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use revguard_app::{
    load_config, render_problems, run_check, runtime_error_report, verdict_exit_code, write_report,
};
use revguard_resolver::GclientResolver;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "revguard",
    version,
    about = "Check that every DEPS pin is hosted on an approved host and pinned to a commit hash"
)]
struct Cli {
    /// Repository root (directory `gclient revinfo` runs in).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Policy TOML owned by the caller (not read from the repository).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Also write a JSON report here.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();
    cmd_check(&cli)
}

/// Logs go to stderr. `RUST_LOG` overrides the default of `warn`, which keeps a passing run silent.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(std::env::var_os("NO_COLOR").is_none()),
        )
        .with(filter)
        .init();
}

fn cmd_check(cli: &Cli) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let repo_root = cli
            .repo_root
            .canonicalize_utf8()
            .with_context(|| format!("repo root does not exist: {}", cli.repo_root))?;

        let cfg_text = match &cli.config {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read config: {path}"))?,
            None => String::new(),
        };
        let resolved = load_config(&cfg_text)?;
        tracing::debug!(repo_root = %repo_root, resolver = %resolved.effective.resolver_label, "starting check");

        let resolver = GclientResolver::new(&repo_root, resolved.resolver.clone());
        let output = run_check(&resolver, &resolved.effective)?;

        if let Some(path) = &cli.report_out {
            write_report(path, &output.report).context("write report json")?;
        }
        if let Some(problems) = render_problems(&output.report) {
            eprint!("{problems}");
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = &cli.report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                if let Err(write_err) = write_report(path, &report) {
                    tracing::warn!(error = %format!("{write_err:#}"), "could not write runtime error report");
                }
            }
            eprintln!("revguard error: {err:#}");
            std::process::exit(1);
        }
    }
}
