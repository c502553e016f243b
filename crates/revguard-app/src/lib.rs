//! Use case orchestration for revguard.
//!
//! This crate provides the application layer: use cases that coordinate the resolver, domain,
//! and settings layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;
mod report;

pub use check::{CheckOutput, load_config, run_check, verdict_exit_code};
pub use render::{BANNER, render_problems};
pub use report::{parse_report_json, runtime_error_report, serialize_report, write_report};
