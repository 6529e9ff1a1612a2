use regex::Regex;

/// Matcher for one FORBIDDEN pattern, chosen once per pattern string.
///
/// Pattern text that does not compile as a regular expression falls back to
/// plain substring containment, so every declared pattern produces a matcher
/// and a scan never aborts on malformed policy authoring.
#[derive(Clone, Debug)]
pub enum PatternMatcher {
    Regex(Regex),
    Literal(String),
}

impl PatternMatcher {
    pub fn compile(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => PatternMatcher::Regex(re),
            Err(_) => PatternMatcher::Literal(pattern.to_string()),
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        match self {
            PatternMatcher::Regex(re) => re.is_match(line),
            PatternMatcher::Literal(needle) => line.contains(needle.as_str()),
        }
    }
}

/// A pattern string paired with its compiled matcher.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    /// The pattern text as declared in the policy document.
    pub text: String,
    pub matcher: PatternMatcher,
}

impl CompiledPattern {
    pub fn compile(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matcher: PatternMatcher::compile(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_regex_compiles_as_regex() {
        let m = PatternMatcher::compile(r"unwrap\(\)");
        assert!(matches!(m, PatternMatcher::Regex(_)));
        assert!(m.is_match("let x = foo.unwrap();"));
        assert!(!m.is_match("let x = foo.unwrap_or(0);"));
    }

    #[test]
    fn invalid_regex_falls_back_to_literal_substring() {
        let m = PatternMatcher::compile("eval(");
        assert!(matches!(m, PatternMatcher::Literal(_)));
        assert!(m.is_match("eval(user_input)"));
        assert!(!m.is_match("evaluate(user_input)"));
    }

    #[test]
    fn plain_word_stays_a_regex() {
        // A bare word is valid regex; both interpretations agree.
        let m = PatternMatcher::compile("TODO");
        assert!(matches!(m, PatternMatcher::Regex(_)));
        assert!(m.is_match("# TODO: remove"));
    }

    #[test]
    fn compiled_pattern_keeps_original_text() {
        let p = CompiledPattern::compile("eval(");
        assert_eq!(p.text, "eval(");
    }

    proptest! {
        #[test]
        fn compile_and_match_never_panic(pattern in "\\PC*", line in "\\PC*") {
            let m = PatternMatcher::compile(&pattern);
            let _ = m.is_match(&line);
        }
    }
}
