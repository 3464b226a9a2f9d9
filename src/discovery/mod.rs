use crate::error::DiscoveryError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

fn build_globset(patterns: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| DiscoveryError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| DiscoveryError::GlobPattern {
        pattern: patterns.join(", "),
        source: e,
    })
}

/// Find scan results files under `dir`, sorted by path
pub fn discover_results_files(
    dir: &Path,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !dir.is_dir() {
        return Err(DiscoveryError::MissingDir(dir.to_path_buf()));
    }

    let include_set = build_globset(include)?;
    let exclude_set = build_globset(exclude)?;

    let walker = WalkBuilder::new(dir)
        .hidden(true) // skip hidden files, including session state
        .git_ignore(true)
        .git_exclude(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        // Patterns are matched relative to the results directory
        let rel_path = path.strip_prefix(dir).unwrap_or(path);
        if !include_set.is_match(rel_path) || exclude_set.is_match(rel_path) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    debug!("Discovered {} results files under {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_include_and_exclude() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nightly")).unwrap();
        fs::write(dir.path().join("a.a11ytest.json"), "{}").unwrap();
        fs::write(dir.path().join("nightly/b.a11ytest.json"), "{}").unwrap();
        fs::write(dir.path().join("nightly/draft-c.a11ytest.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = discover_results_files(
            dir.path(),
            &patterns(&["**/*.a11ytest.json"]),
            &patterns(&["**/draft-*"]),
        )
        .unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("a.a11ytest.json"),
                dir.path().join("nightly/b.a11ytest.json"),
            ]
        );
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_results_files(
            &dir.path().join("nope"),
            &patterns(&["**/*.json"]),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::MissingDir(_)));
    }

    #[test]
    fn test_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_results_files(dir.path(), &patterns(&["[oops"]), &[]).unwrap_err();
        assert!(matches!(err, DiscoveryError::GlobPattern { .. }));
    }
}
