use crate::model::ArchguardConfigV1;
use camino::Utf8Path;

pub const DEFAULT_FEATURES_DIR: &str = "features";
pub const DEFAULT_TOOLS_ROOT: &str = "tools";

/// CLI-level overrides; take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub features_dir: Option<String>,
    pub tools_root: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

/// What the check pipeline actually consumes. Both paths are relative to
/// the project root.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub features_dir: String,
    pub tools_root: String,
}

pub fn resolve_config(
    cfg: ArchguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let features_dir = overrides
        .features_dir
        .or(cfg.features_dir)
        .unwrap_or_else(|| DEFAULT_FEATURES_DIR.to_string());
    let tools_root = overrides
        .tools_root
        .or(cfg.tools_root)
        .unwrap_or_else(|| DEFAULT_TOOLS_ROOT.to_string());

    validate_relative("features_dir", &features_dir)?;
    validate_relative("tools_root", &tools_root)?;

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            features_dir,
            tools_root,
        },
    })
}

fn validate_relative(key: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    if Utf8Path::new(value).is_absolute() {
        anyhow::bail!("{key} must be relative to the project root: {value}");
    }
    Ok(())
}
