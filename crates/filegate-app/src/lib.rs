//! Use case orchestration for filegate.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, engine, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use render::{parse_report_json, render_markdown, serialize_report, to_renderable};
