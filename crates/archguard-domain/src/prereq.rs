use regex::Regex;
use std::sync::LazyLock;

/// Marker prefix binding a feature document to a policy document.
const PREREQUISITE_MARKER: &str = "> Prerequisite:";

/// Matches policy references in bare (`arch_x.md`) or path-qualified
/// (`features/arch_x.md`) form; the capture is always the bare filename.
static POLICY_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:features/)?(arch_\w+\.md)").expect("policy reference regex"));

/// Extract the policy documents a feature declares itself bound to.
///
/// Only lines beginning (after trimming) with `> Prerequisite:` are
/// considered. Both reference forms fold to the bare filename, deduplicated
/// on insert with first-seen order preserved. A feature with no such lines
/// has no policy obligations.
pub fn extract_prerequisites(feature_text: &str) -> Vec<String> {
    let mut prereqs: Vec<String> = Vec::new();
    for line in feature_text.lines() {
        let Some(rest) = line.trim().strip_prefix(PREREQUISITE_MARKER) else {
            continue;
        };
        for caps in POLICY_REF.captures_iter(rest) {
            let name = &caps[1];
            if !prereqs.iter().any(|p| p == name) {
                prereqs.push(name.to_string());
            }
        }
    }
    prereqs
}
