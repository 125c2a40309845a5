//! Path utilities
//!
//! Helpers for naming a run after its root directory, normalizing the
//! paths shown in the document, and comparing paths as plain strings.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Title used when the root has no usable name (e.g. `/`)
const FALLBACK_TITLE: &str = "root";

/// Name of the root directory, used for the document title and output file.
///
/// Paths like `.` or `..` carry no final component, so the canonical path is
/// consulted for those.
pub fn root_title(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }

    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Lexically normalize a path: drop `.` components and fold `name/..` pairs.
///
/// `./proj/A.java` becomes `proj/A.java`. The filesystem is not consulted, so
/// `..` after a symlinked directory folds the same way. An empty result is `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// A path as a string, for literal suffix and substring checks
pub fn path_str(path: &Path) -> Cow<'_, str> {
    path.to_string_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_title_uses_last_component() {
        assert_eq!(root_title(Path::new("/work/my-project")), "my-project");
        assert_eq!(root_title(Path::new("./my-project/")), "my-project");
    }

    #[test]
    fn test_root_title_resolves_dot() {
        let temp = tempfile::tempdir().unwrap();
        let named = temp.path().join("service");
        std::fs::create_dir(&named).unwrap();

        let title = root_title(&named.join("."));
        assert_eq!(title, "service");
    }

    #[test]
    fn test_root_title_filesystem_root() {
        assert_eq!(root_title(Path::new("/")), "root");
    }

    #[test]
    fn test_normalize_drops_current_dir() {
        assert_eq!(path_str(&normalize_path(Path::new("./proj/A.java"))), "proj/A.java");
        assert_eq!(path_str(&normalize_path(Path::new("proj/./A.java"))), "proj/A.java");
        assert_eq!(path_str(&normalize_path(Path::new("./A.java"))), "A.java");
        assert_eq!(path_str(&normalize_path(Path::new("."))), ".");
    }

    #[test]
    fn test_normalize_folds_parent_dir() {
        assert_eq!(path_str(&normalize_path(Path::new("a/../b/C.java"))), "b/C.java");
        assert_eq!(path_str(&normalize_path(Path::new("../x/y.yml"))), "../x/y.yml");
        assert_eq!(path_str(&normalize_path(Path::new("a/../../y.yml"))), "../y.yml");
        assert_eq!(path_str(&normalize_path(Path::new("/../etc"))), "/etc");
    }

    #[test]
    fn test_normalize_keeps_absolute_paths() {
        assert_eq!(
            path_str(&normalize_path(Path::new("/work//proj/src/"))),
            "/work/proj/src"
        );
    }

    #[test]
    fn test_path_str() {
        assert_eq!(path_str(Path::new("a/b/c.java")), "a/b/c.java");
    }
}
