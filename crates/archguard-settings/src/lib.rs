//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::ArchguardConfigV1;
pub use resolve::{EffectiveConfig, Overrides, ResolvedConfig};

/// Parse `archguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ArchguardConfigV1> {
    let cfg: ArchguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the check pipeline
/// (defaults + config file + overrides).
pub fn resolve_config(
    cfg: ArchguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
