use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - pattern text
/// - file (repo-relative)
/// - trimmed line content
///
/// Line numbers are not part of the identity: the fingerprint survives edits
/// that only renumber lines.
pub fn violation_fingerprint(pattern: &str, file: &str, text: &str) -> String {
    let canonical = [pattern, file, text].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
