//! Pure governance evaluation (no IO).
//!
//! Input: a governance model constructed elsewhere.
//! Output: a check result carrying violations and a verdict detail.

#![forbid(unsafe_code)]

pub mod matcher;
pub mod model;
pub mod prereq;
pub mod scan;

mod engine;
mod fingerprint;

pub use engine::{evaluate, referenced_patterns};
pub use prereq::extract_prerequisites;
