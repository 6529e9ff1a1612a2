use crate::fingerprint::violation_fingerprint;
use crate::matcher::CompiledPattern;
use archguard_types::{RepoPath, Violation};

/// Scan one file's lines against the compiled pattern set.
///
/// Violations are emitted line-major: line order first, then pattern order
/// within a line. Line numbers are 1-based; reported text is the matched
/// line with surrounding whitespace trimmed.
pub fn scan_lines(
    file: &RepoPath,
    lines: &[String],
    patterns: &[CompiledPattern],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        for pattern in patterns {
            if pattern.matcher.is_match(line) {
                let text = line.trim().to_string();
                violations.push(Violation {
                    pattern: pattern.text.clone(),
                    file: file.clone(),
                    line: (idx + 1) as u32,
                    fingerprint: Some(violation_fingerprint(
                        &pattern.text,
                        file.as_str(),
                        &text,
                    )),
                    text,
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &str) -> Vec<String> {
        raw.lines().map(str::to_string).collect()
    }

    fn compile(patterns: &[&str]) -> Vec<CompiledPattern> {
        patterns.iter().map(|p| CompiledPattern::compile(p)).collect()
    }

    #[test]
    fn reports_one_based_lines_and_trimmed_text() {
        let file = RepoPath::new("tools/x/impl.py");
        let src = lines("import sys\n\n    eval(user_input)\n");
        let found = scan_lines(&file, &src, &compile(&["eval("]));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "eval(");
        assert_eq!(found[0].file, RepoPath::new("tools/x/impl.py"));
        assert_eq!(found[0].line, 3);
        assert_eq!(found[0].text, "eval(user_input)");
        assert!(found[0].fingerprint.is_some());
    }

    #[test]
    fn line_major_then_pattern_order() {
        let file = RepoPath::new("a.py");
        let src = lines("eval(x); exec(y)\nexec(z)\n");
        let found = scan_lines(&file, &src, &compile(&["exec(", "eval("]));

        let keys: Vec<(u32, &str)> = found.iter().map(|v| (v.line, v.pattern.as_str())).collect();
        assert_eq!(keys, vec![(1, "exec("), (1, "eval("), (2, "exec(")]);
    }

    #[test]
    fn no_patterns_or_no_lines_yield_nothing() {
        let file = RepoPath::new("a.py");
        assert!(scan_lines(&file, &lines("eval(x)\n"), &[]).is_empty());
        assert!(scan_lines(&file, &[], &compile(&["eval("])).is_empty());
    }

    #[test]
    fn duplicate_pattern_texts_each_match() {
        // Two policies may declare the same pattern; each occurrence applies.
        let file = RepoPath::new("a.py");
        let found = scan_lines(&file, &lines("eval(x)\n"), &compile(&["eval(", "eval("]));
        assert_eq!(found.len(), 2);
    }
}
