//! Pack flow - discover, read, and sanitize a tree into a RunResult
//!
//! The pipeline itself does no terminal output and never exits the process;
//! the CLI decides how to report what it returns.

use std::path::PathBuf;
use tracing::debug;

use crate::backends::scan::collect_files;
use crate::core::file_reader::read_source;
use crate::core::model::{FileEntry, PackError, RunConfig, RunResult};
use crate::core::sanitize::sanitize;
use crate::core::tokenizer::{count_tokens, TokenModel};

/// Document statistics shown by `--stats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStats {
    pub total_files: usize,
    pub failed_files: usize,
    pub total_chars: usize,
    pub total_lines: usize,
    pub estimated_tokens: usize,
    pub token_model: String,
}

/// Read and sanitize one file. A read error becomes a failed entry.
pub fn process_file(path: PathBuf) -> FileEntry {
    match read_source(&path) {
        Ok(raw) => {
            let content = sanitize(&raw, &path);
            debug!(
                "Processed {} ({} -> {} bytes)",
                path.display(),
                raw.len(),
                content.len()
            );
            FileEntry::processed(path, content)
        }
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            FileEntry::failed(path, e.to_string())
        }
    }
}

/// Process files one after another, in the given order
pub fn process_files(paths: Vec<PathBuf>) -> RunResult {
    let mut result = RunResult::new();
    for path in paths {
        result.push(process_file(path));
    }
    result
}

/// Run discovery and processing for a config
pub fn run_pipeline(config: &RunConfig) -> Result<RunResult, PackError> {
    let files = collect_files(config)?;
    Ok(process_files(files))
}

/// Measure a rendered document
pub fn compute_stats(document: &str, result: &RunResult, model: TokenModel) -> PackStats {
    PackStats {
        total_files: result.len(),
        failed_files: result.entries.iter().filter(|e| e.is_failed()).count(),
        total_chars: document.chars().count(),
        total_lines: document.lines().count(),
        estimated_tokens: count_tokens(document, model),
        token_model: model.to_string(),
    }
}
