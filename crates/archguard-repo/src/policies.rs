use archguard_domain::model::PolicyIndex;
use archguard_types::ForbiddenPattern;
use camino::Utf8Path;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a FORBIDDEN declaration anywhere in a (trimmed) policy line, e.g.
/// `FORBIDDEN: eval(` or `* FORBIDDEN: os.system`.
static FORBIDDEN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FORBIDDEN:\s*(.+)").expect("forbidden line regex"));

/// Index FORBIDDEN patterns from the `arch_*.md` documents in `features_dir`.
///
/// Discovery semantics:
/// - only filenames matching `arch_*.md` are considered
/// - result order is lexicographic by filename
/// - unreadable documents are silently skipped
/// - documents with no FORBIDDEN lines are omitted
/// - a missing directory yields an empty index, not an error
pub fn discover_forbidden_patterns(features_dir: &Utf8Path) -> PolicyIndex {
    let mut index = PolicyIndex::new();
    let Ok(entries) = features_dir.read_dir_utf8() else {
        return index;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string();
        if !(name.starts_with("arch_") && name.ends_with(".md")) {
            continue;
        }
        let Ok(text) = std::fs::read_to_string(entry.path()) else {
            continue;
        };

        let patterns = forbidden_patterns_in(&text);
        if !patterns.is_empty() {
            index.insert(name, patterns);
        }
    }

    index
}

fn forbidden_patterns_in(text: &str) -> Vec<ForbiddenPattern> {
    let mut patterns = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let Some(caps) = FORBIDDEN_LINE.captures(line.trim()) else {
            continue;
        };
        // Trailing backticks are markdown markup, not pattern text.
        let pattern = caps[1].trim().trim_end_matches('`').trim();
        if !pattern.is_empty() {
            patterns.push(ForbiddenPattern {
                pattern: pattern.to_string(),
                line: (idx + 1) as u32,
            });
        }
    }
    patterns
}
