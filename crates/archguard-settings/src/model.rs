use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `archguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArchguardConfigV1 {
    /// Optional schema string for tooling (`archguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Policy-document directory, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_dir: Option<String>,

    /// Implementation tree root, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_root: Option<String>,
}
