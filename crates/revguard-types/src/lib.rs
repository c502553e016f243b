//! Stable DTOs and IDs used across the revguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes

#![forbid(unsafe_code)]

pub mod ids;
pub mod receipt;

pub use receipt::{
    Finding, Location, RevguardData, RevguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta,
    Verdict,
};
