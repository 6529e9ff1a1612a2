use archguard_types::{ForbiddenPattern, RepoPath};
use std::collections::BTreeMap;

/// Policy filename -> FORBIDDEN patterns, lexicographic by filename.
///
/// Per-document pattern order follows source line order.
pub type PolicyIndex = BTreeMap<String, Vec<ForbiddenPattern>>;

/// Everything the evaluation engine needs, assembled by the repo adapter.
///
/// Built fresh for each check; nothing here is persisted or shared across
/// invocations.
#[derive(Clone, Debug, Default)]
pub struct GovernanceModel {
    pub project_root: RepoPath,

    /// Logical feature name used to locate implementation files.
    pub feature_stem: String,

    /// Policy filenames the feature declares itself bound to, first-seen
    /// order, deduplicated.
    pub prerequisites: Vec<String>,

    pub policies: PolicyIndex,

    /// Located implementation files, locator order.
    pub sources: Vec<SourceFile>,
}

/// An implementation file admitted to the scan.
#[derive(Clone, Debug, Default)]
pub struct SourceFile {
    /// Path relative to the project root.
    pub path: RepoPath,
    /// Empty when the file could not be read or decoded as text.
    pub lines: Vec<String>,
}
