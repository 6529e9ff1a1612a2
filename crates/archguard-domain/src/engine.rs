use crate::matcher::CompiledPattern;
use crate::model::GovernanceModel;
use crate::scan;
use archguard_types::{CheckResult, CheckStatus, Violation};

/// Pattern texts from the policies the feature references, in prerequisite
/// order, then per-document source order. Prerequisites missing from the
/// index contribute nothing. Duplicate texts are kept.
pub fn referenced_patterns(model: &GovernanceModel) -> Vec<String> {
    let mut patterns = Vec::new();
    for prereq in &model.prerequisites {
        if let Some(declared) = model.policies.get(prereq) {
            patterns.extend(declared.iter().map(|p| p.pattern.clone()));
        }
    }
    patterns
}

/// Evaluate one governance model into a verdict.
///
/// Each branch is terminal; there is no error path. Unverifiable inputs
/// (no prerequisites, no patterns, no implementation files) resolve to a
/// permissive `Pass` with an explanatory detail.
pub fn evaluate(model: &GovernanceModel) -> CheckResult {
    if model.prerequisites.is_empty() {
        return pass("No policy prerequisites defined.".to_string());
    }

    let patterns = referenced_patterns(model);
    if patterns.is_empty() {
        return pass("No FORBIDDEN patterns in referenced policies.".to_string());
    }

    if model.sources.is_empty() {
        return pass("No implementation files found to scan.".to_string());
    }

    let compiled: Vec<CompiledPattern> = patterns
        .iter()
        .map(|p| CompiledPattern::compile(p))
        .collect();

    let mut violations: Vec<Violation> = Vec::new();
    for source in &model.sources {
        violations.extend(scan::scan_lines(&source.path, &source.lines, &compiled));
    }

    if !violations.is_empty() {
        let detail = format!("{} FORBIDDEN violation(s) detected", violations.len());
        return CheckResult {
            status: CheckStatus::Fail,
            violations,
            detail,
        };
    }

    pass(format!(
        "Scanned {} file(s), no violations.",
        model.sources.len()
    ))
}

fn pass(detail: String) -> CheckResult {
    CheckResult {
        status: CheckStatus::Pass,
        violations: Vec::new(),
        detail,
    }
}
