//! Repository adapters: discover policy documents, locate implementation
//! files, and assemble the governance model for the evaluation engine.
//!
//! This crate is allowed to do filesystem IO. Every absent or unreadable
//! resource degrades to "nothing found here"; model construction never
//! fails.

#![forbid(unsafe_code)]

mod locate;
mod policies;

use archguard_domain::extract_prerequisites;
use archguard_domain::model::{GovernanceModel, SourceFile};
use archguard_types::RepoPath;
use camino::Utf8Path;
use rayon::prelude::*;

pub use locate::locate_implementation_files;
pub use policies::discover_forbidden_patterns;

/// Assemble the in-memory model the evaluation engine consumes.
///
/// `features_dir` defaults to `<project_root>/features` when not supplied.
/// Located files are read in parallel; source order stays the locator's
/// deterministic order.
pub fn build_governance_model(
    project_root: &Utf8Path,
    feature_text: &str,
    feature_stem: &str,
    features_dir: Option<&Utf8Path>,
    tools_root: &str,
) -> GovernanceModel {
    let prerequisites = extract_prerequisites(feature_text);

    let features_dir = features_dir
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| project_root.join("features"));
    let policies = policies::discover_forbidden_patterns(&features_dir);

    let located = locate::locate_implementation_files(project_root, feature_stem, tools_root);
    let sources: Vec<SourceFile> = located
        .par_iter()
        .map(|abs| SourceFile {
            path: relative_to_root(abs, project_root),
            lines: read_lines(abs),
        })
        .collect();

    GovernanceModel {
        project_root: RepoPath::from(project_root),
        feature_stem: feature_stem.to_string(),
        prerequisites,
        policies,
        sources,
    }
}

/// Unreadable or non-UTF-8 files scan as empty: they stay in the model (the
/// scanned-file count includes them) but can produce no violations.
fn read_lines(path: &Utf8Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

fn relative_to_root(path: &Utf8Path, project_root: &Utf8Path) -> RepoPath {
    match path.strip_prefix(project_root) {
        Ok(rel) => RepoPath::new(rel.as_str()),
        Err(_) => RepoPath::new(path.as_str()),
    }
}
