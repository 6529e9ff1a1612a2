//! The `check` use case: resolve config, build the model, evaluate, wrap the
//! verdict in a report envelope.

use anyhow::Context;
use archguard_settings::{Overrides, ResolvedConfig};
use archguard_types::{ArchguardData, ArchguardReport, CheckStatus, SCHEMA_REPORT_V1, ToolMeta};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Project root path.
    pub project_root: &'a Utf8Path,
    /// Raw feature document text.
    pub feature_text: &'a str,
    /// Logical feature name used for implementation lookup.
    pub feature_stem: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ArchguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, assemble the governance model,
/// evaluate, produce the report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        archguard_settings::ArchguardConfigV1::default()
    } else {
        archguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = archguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let features_dir = input.project_root.join(&resolved.effective.features_dir);
    let model = archguard_repo::build_governance_model(
        input.project_root,
        input.feature_text,
        input.feature_stem,
        Some(&features_dir),
        &resolved.effective.tools_root,
    );

    let patterns_applied = archguard_domain::referenced_patterns(&model).len() as u32;
    let result = archguard_domain::evaluate(&model);

    let finished_at = OffsetDateTime::now_utc();

    let report = ArchguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "archguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        status: result.status,
        detail: result.detail,
        violations: result.violations,
        data: ArchguardData {
            feature: model.feature_stem.clone(),
            prerequisites: model.prerequisites.clone(),
            policies_indexed: model.policies.len() as u32,
            patterns_applied,
            files_scanned: model.sources.len() as u32,
        },
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map check status to exit code: 0 = pass, 2 = fail.
pub fn status_exit_code(status: CheckStatus) -> i32 {
    match status {
        CheckStatus::Pass => 0,
        CheckStatus::Fail => 2,
    }
}
