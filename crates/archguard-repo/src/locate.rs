use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;

/// Known feature-stem suffixes stripped when guessing tool directories,
/// e.g. `critic_tool` -> `critic`. Naming conventions outside this table
/// are not covered.
const STEM_SUFFIXES: [&str; 5] = [
    "_tool",
    "_status_monitor",
    "_generator",
    "_sync",
    "_bootstrap",
];

/// Best-effort mapping from a feature stem to its implementation files.
///
/// A tools subdirectory is selected when its name equals the stem, the stem
/// with a known suffix stripped, or a prefix of the stem. Selected
/// directories contribute their immediate regular, non-hidden children;
/// the listing is single-level, nested directories are not walked.
/// Directories and files are visited in lexicographic order so the result
/// is deterministic. A missing tools root yields an empty list.
pub fn locate_implementation_files(
    project_root: &Utf8Path,
    feature_stem: &str,
    tools_root: &str,
) -> Vec<Utf8PathBuf> {
    let mut candidates: BTreeSet<String> = BTreeSet::new();
    candidates.insert(feature_stem.to_string());
    for suffix in STEM_SUFFIXES {
        if let Some(stripped) = feature_stem.strip_suffix(suffix) {
            candidates.insert(stripped.to_string());
        }
    }

    let tools_abs = project_root.join(tools_root);
    let Ok(entries) = tools_abs.read_dir_utf8() else {
        return Vec::new();
    };

    let mut tool_dirs: Vec<Utf8PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .filter(|p| p.is_dir())
        .collect();
    tool_dirs.sort();

    let mut files: Vec<Utf8PathBuf> = Vec::new();
    for dir in tool_dirs {
        let Some(name) = dir.file_name() else {
            continue;
        };
        if !(candidates.contains(name) || feature_stem.starts_with(name)) {
            continue;
        }

        let Ok(children) = dir.read_dir_utf8() else {
            continue;
        };
        let mut dir_files: Vec<Utf8PathBuf> = children
            .filter_map(Result::ok)
            .map(|e| e.into_path())
            .filter(|p| p.is_file())
            .filter(|p| p.file_name().is_some_and(|n| !n.starts_with('.')))
            .collect();
        dir_files.sort();
        files.extend(dir_files);
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn relative(files: &[Utf8PathBuf], root: &Utf8Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).expect("under root").to_string())
            .collect()
    }

    #[test]
    fn missing_tools_root_yields_empty() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        assert!(locate_implementation_files(&root, "critic_tool", "tools").is_empty());
    }

    #[test]
    fn suffix_stripped_stem_matches_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("tools/critic/check.py"), "pass\n");
        write_file(&root.join("tools/critic/report.py"), "pass\n");
        write_file(&root.join("tools/other/run.py"), "pass\n");

        let files = locate_implementation_files(&root, "critic_tool", "tools");
        assert_eq!(
            relative(&files, &root),
            vec!["tools/critic/check.py", "tools/critic/report.py"]
        );
    }

    #[test]
    fn stem_prefix_matches_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        // 'cdd_status_monitor' starts with 'cdd'.
        write_file(&root.join("tools/cdd/monitor.py"), "pass\n");

        let files = locate_implementation_files(&root, "cdd_status_monitor", "tools");
        assert_eq!(relative(&files, &root), vec!["tools/cdd/monitor.py"]);
    }

    #[test]
    fn exact_stem_directory_matches() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("tools/report_sync/sync.py"), "pass\n");

        let files = locate_implementation_files(&root, "report_sync", "tools");
        assert_eq!(relative(&files, &root), vec!["tools/report_sync/sync.py"]);
    }

    #[test]
    fn hidden_files_and_nested_directories_are_skipped() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("tools/critic/check.py"), "pass\n");
        write_file(&root.join("tools/critic/.hidden"), "secret\n");
        write_file(&root.join("tools/critic/nested/deep.py"), "pass\n");

        let files = locate_implementation_files(&root, "critic_tool", "tools");
        assert_eq!(relative(&files, &root), vec!["tools/critic/check.py"]);
    }

    #[test]
    fn unrelated_directories_are_not_selected() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("tools/generator/gen.py"), "pass\n");

        // 'critic_tool' neither equals, strips to, nor starts with 'generator'.
        assert!(locate_implementation_files(&root, "critic_tool", "tools").is_empty());
    }

    #[test]
    fn selected_directories_contribute_in_sorted_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        // Both 'cdd' and 'cdd_sync' are selected for stem 'cdd_sync':
        // 'cdd' by prefix, 'cdd_sync' exactly.
        write_file(&root.join("tools/cdd_sync/b.py"), "pass\n");
        write_file(&root.join("tools/cdd_sync/a.py"), "pass\n");
        write_file(&root.join("tools/cdd/core.py"), "pass\n");

        let files = locate_implementation_files(&root, "cdd_sync", "tools");
        assert_eq!(
            relative(&files, &root),
            vec![
                "tools/cdd/core.py",
                "tools/cdd_sync/a.py",
                "tools/cdd_sync/b.py"
            ]
        );
    }

    #[test]
    fn custom_tools_root_is_honored() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("services/critic/check.py"), "pass\n");

        let files = locate_implementation_files(&root, "critic_tool", "services");
        assert_eq!(relative(&files, &root), vec!["services/critic/check.py"]);
    }
}
