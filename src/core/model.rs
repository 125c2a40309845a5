//! Run model
//!
//! Everything the pipeline produces flows through these types: the caller
//! builds a `RunConfig`, the pipeline returns a `RunResult`, and the writer
//! renders it. Failures that abort a run are `PackError`s; per-file read
//! failures are captured in `FileOutcome::Failed` instead.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path suffixes that select a file for packing
pub const QUALIFYING_EXTENSIONS: [&str; 4] = [".java", ".yml", ".yaml", ".properties"];

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Please provide an entry folder path as an argument.")]
    MissingEntryFolder,

    #[error("The provided path \"{}\" is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to traverse directory tree")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    #[error("Failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Folder-name tokens that prune subtrees during traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    tokens: Vec<String>,
}

impl ExclusionSet {
    /// Build a set from raw tokens, trimming each and dropping empty ones
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// Parse a comma-separated argument such as `"node_modules, build"`
    pub fn parse(arg: &str) -> Self {
        Self::new(arg.split(','))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether a directory should be skipped.
    ///
    /// A token matches when it equals the directory's base name, or when it
    /// occurs anywhere in the full path string. The substring rule means a
    /// token can match at any depth, including inside the root path itself.
    pub fn matches(&self, dir: &Path) -> bool {
        if self.tokens.is_empty() {
            return false;
        }

        let name = dir.file_name().map(|n| n.to_string_lossy());
        let full = dir.to_string_lossy();

        self.tokens.iter().any(|token| {
            name.as_deref() == Some(token.as_str()) || full.contains(token.as_str())
        })
    }
}

/// Inputs to a single pack run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory to scan
    pub root: PathBuf,

    /// Subtrees to prune
    pub exclusions: ExclusionSet,

    /// Sort discovered paths lexicographically instead of keeping listing order
    pub sort_paths: bool,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions: ExclusionSet::default(),
            sort_paths: false,
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_sorted_paths(mut self, sort: bool) -> Self {
        self.sort_paths = sort;
        self
    }
}

/// What happened when a file was read and sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Sanitized content
    Processed(String),
    /// Read error message
    Failed(String),
}

/// One qualifying file and its outcome
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path as discovered (root-prefixed)
    pub path: PathBuf,

    /// Lowercase extension without the leading dot (empty for dotfiles)
    pub extension: String,

    pub outcome: FileOutcome,
}

impl FileEntry {
    pub fn processed(path: PathBuf, content: String) -> Self {
        let extension = extension_of(&path);
        Self {
            path,
            extension,
            outcome: FileOutcome::Processed(content),
        }
    }

    pub fn failed(path: PathBuf, message: impl Into<String>) -> Self {
        let extension = extension_of(&path);
        Self {
            path,
            extension,
            outcome: FileOutcome::Failed(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }
}

/// Lowercase extension of a path, without the dot
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Ordered per-file outcomes of a run
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub entries: Vec<FileEntry>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose content could not be read, with their messages
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            FileOutcome::Failed(message) => Some((entry.path.as_path(), message.as_str())),
            FileOutcome::Processed(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_parse_trims_tokens() {
        let set = ExclusionSet::parse(" node_modules ,build,  target");
        assert_eq!(set.tokens(), &["node_modules", "build", "target"]);
    }

    #[test]
    fn test_exclusion_parse_drops_empty_tokens() {
        // a raw split of "build," yields "", which occurs in every path and
        // would exclude every subdirectory
        let set = ExclusionSet::parse("build,, ,");
        assert_eq!(set.tokens(), &["build"]);
        assert!(ExclusionSet::parse("").is_empty());
    }

    #[test]
    fn test_exclusion_matches_basename() {
        let set = ExclusionSet::parse("node_modules");
        assert!(set.matches(Path::new("/project/node_modules")));
        assert!(!set.matches(Path::new("/project/src")));
    }

    #[test]
    fn test_exclusion_matches_substring_at_any_depth() {
        let set = ExclusionSet::parse("build");
        assert!(set.matches(Path::new("/project/build-output")));
        assert!(set.matches(Path::new("/project/build/classes")));
        assert!(set.matches(Path::new("/project/rebuild")));
    }

    #[test]
    fn test_empty_exclusion_matches_nothing() {
        let set = ExclusionSet::default();
        assert!(!set.matches(Path::new("/project/anything")));
    }

    #[test]
    fn test_file_entry_extension_is_lowercase() {
        let entry = FileEntry::processed(PathBuf::from("src/App.JAVA"), String::new());
        assert_eq!(entry.extension, "java");

        let entry = FileEntry::failed(PathBuf::from("conf/.yml"), "gone");
        assert_eq!(entry.extension, "");
        assert!(entry.is_failed());
    }

    #[test]
    fn test_run_result_failures() {
        let mut result = RunResult::new();
        result.push(FileEntry::processed(PathBuf::from("a.yml"), "k: v".into()));
        result.push(FileEntry::failed(PathBuf::from("b.yml"), "denied"));

        assert_eq!(result.len(), 2);
        let failures: Vec<_> = result.failures().collect();
        assert_eq!(failures, vec![(Path::new("b.yml"), "denied")]);
    }

    #[test]
    fn test_pack_error_messages() {
        let err = PackError::NotADirectory(PathBuf::from("missing/dir"));
        assert_eq!(
            err.to_string(),
            "The provided path \"missing/dir\" is not a valid directory."
        );
    }
}
