//! Output file naming and writing

use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::PackError;

/// `<title>-<MM><DD>-<HH><mm>.md` for the run's start time
pub fn output_file_name(title: &str, started_at: &NaiveDateTime) -> String {
    format!("{}-{}.md", title, started_at.format("%m%d-%H%M"))
}

/// Full path of the output document inside `dir`
pub fn output_path(dir: &Path, title: &str, started_at: &NaiveDateTime) -> PathBuf {
    dir.join(output_file_name(title, started_at))
}

/// Write the document, creating missing parent directories
pub fn write_document(path: &Path, document: &str) -> Result<(), PackError> {
    let to_write_error = |source| PackError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, document.as_bytes()).map_err(to_write_error)
}
