use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for archguard reports.
pub const SCHEMA_REPORT_V1: &str = "archguard.report.v1";

/// Status is intentionally binary: it maps cleanly to CI signals.
///
/// There is no "could not determine" state; unverifiable inputs resolve to
/// `Pass` with an explanatory detail string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// One implementation line matching a FORBIDDEN pattern from an applicable
/// policy document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// The pattern text as declared in the policy document.
    pub pattern: String,
    /// Repo-relative path of the matched implementation file.
    pub file: RepoPath,
    /// 1-based line number of the match.
    pub line: u32,
    /// Matched line content with surrounding whitespace trimmed.
    pub text: String,

    /// Stable identifier intended for dedup and trending. Hash of
    /// `pattern + file + trimmed text`; line numbers are excluded so the
    /// identity survives edits that only renumber lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// The verdict of one governance check. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub violations: Vec<Violation>,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Archguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ArchguardData {
    /// Feature stem the check ran against.
    pub feature: String,
    /// Policy filenames the feature declared, first-seen order.
    pub prerequisites: Vec<String>,

    pub policies_indexed: u32,
    pub patterns_applied: u32,
    pub files_scanned: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows archguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = ArchguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: CheckStatus,
    pub detail: String,
    pub violations: Vec<Violation>,
    pub data: TData,
}

pub type ArchguardReport = ReportEnvelope<ArchguardData>;
