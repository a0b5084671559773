//! File system scanner for gly sources.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::Config;

/// File extension of gly sources.
pub const GLY_EXTENSION: &str = "gly";

pub fn is_gly_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(GLY_EXTENSION)
}

/// Recursively find all gly files below a directory, sorted by path.
pub fn scan_directory(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_gly_file(path) && !config.is_excluded(path))
        .collect();

    files.sort();
    files
}

/// Expand directory arguments into the gly files they contain.
///
/// Files are passed through unchanged (even without a `.gly` extension);
/// directories are only expanded when `recursive` is set.
pub fn expand_paths(paths: &[PathBuf], recursive: bool, config: &Config) -> Vec<PathBuf> {
    let mut result = Vec::new();

    for path in paths {
        if recursive && path.is_dir() {
            result.extend(scan_directory(path, config));
        } else {
            result.push(path.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_gly_file() {
        assert!(is_gly_file(Path::new("kyrie.gly")));
        assert!(!is_gly_file(Path::new("kyrie.gabc")));
        assert!(!is_gly_file(Path::new("gly")));
    }

    #[test]
    fn test_scan_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ordinary/drafts")).unwrap();
        fs::write(root.join("ordinary/kyrie.gly"), "").unwrap();
        fs::write(root.join("ordinary/gloria.gly"), "").unwrap();
        fs::write(root.join("ordinary/drafts/credo.gly"), "").unwrap();
        fs::write(root.join("ordinary/kyrie.gabc"), "").unwrap();

        let files = scan_directory(root, &Config::default());

        assert_eq!(
            files,
            vec![
                root.join("ordinary/drafts/credo.gly"),
                root.join("ordinary/gloria.gly"),
                root.join("ordinary/kyrie.gly"),
            ]
        );
    }

    #[test]
    fn test_scan_respects_excludes() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("kyrie.gly"), "").unwrap();
        fs::write(root.join("drafts/credo.gly"), "").unwrap();

        let config = Config {
            excludes: vec!["drafts/*".to_string()],
            ..Default::default()
        };
        let files = scan_directory(root, &config);

        assert_eq!(files, vec![root.join("kyrie.gly")]);
    }

    #[test]
    fn test_expand_paths() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.gly"), "").unwrap();
        let single = PathBuf::from("single.txt");
        let paths = vec![dir.path().to_path_buf(), single.clone()];

        let flat = expand_paths(&paths, false, &Config::default());
        assert_eq!(flat, paths);

        let expanded = expand_paths(&paths, true, &Config::default());
        assert_eq!(expanded, vec![dir.path().join("a.gly"), single]);
    }
}
