//! Use case orchestration for archguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, repo, and domain layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{run_check, status_exit_code, CheckInput, CheckOutput};
pub use render::{parse_report_json, render_markdown, serialize_report};
