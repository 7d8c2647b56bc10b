//! Stable DTOs and IDs used across the filegate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes for the two rule kinds
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::GatePath;
pub use report::{
    FilegateData, FilegateReport, Finding, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
