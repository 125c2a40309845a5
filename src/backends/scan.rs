//! File discovery
//!
//! Depth-first walk with walkdir, pruning excluded directories before descent,
//! followed by the fixed extension filter.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::model::{ExclusionSet, PackError, RunConfig, QUALIFYING_EXTENSIONS};
use crate::core::paths::{normalize_path, path_str};

/// Walk `root` and return every non-directory entry in listing order.
///
/// Returned paths are lexically normalized, so a root typed as `./proj/`
/// yields `proj/A.java`. Exclusions are tested against the normalized path.
///
/// Links are followed, so a link to a directory is descended and a dangling
/// link is an error. Any listing or stat failure aborts the walk.
pub fn walk_tree(root: &Path, exclusions: &ExclusionSet) -> Result<Vec<PathBuf>, PackError> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            // the root itself is never tested
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let excluded = exclusions.matches(&normalize_path(entry.path()));
            if excluded {
                debug!("Skipping excluded directory {}", entry.path().display());
            }
            !excluded
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        files.push(normalize_path(entry.path()));
    }

    Ok(files)
}

/// Whether the full path ends with one of the qualifying suffixes (case-sensitive)
pub fn is_qualifying(path: &Path) -> bool {
    let path = path_str(path);
    QUALIFYING_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Keep qualifying paths, preserving order
pub fn filter_qualifying(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().filter(|p| is_qualifying(p)).collect()
}

/// Discover the qualifying files for a run
pub fn collect_files(config: &RunConfig) -> Result<Vec<PathBuf>, PackError> {
    let candidates = walk_tree(&config.root, &config.exclusions)?;
    let candidate_count = candidates.len();

    let mut files = filter_qualifying(candidates);
    if config.sort_paths {
        files.sort();
    }

    debug!(
        "Found {} qualifying files among {} candidates",
        files.len(),
        candidate_count
    );
    Ok(files)
}
