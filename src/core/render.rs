//! Document renderer
//!
//! Renders a RunResult into the packed Markdown document: a title line,
//! then one fenced block per file in run order.

use std::path::Path;

use crate::core::model::{FileEntry, FileOutcome, RunResult};

const FENCE: &str = "```";

/// Renders packed documents for one root
pub struct Renderer<'a> {
    title: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the full document.
    ///
    /// The header and every block end in a newline and are joined with
    /// another, so blocks are separated by one blank line.
    pub fn render(&self, result: &RunResult) -> String {
        let mut parts = Vec::with_capacity(result.len() + 1);
        parts.push(self.render_header());
        parts.extend(result.entries.iter().map(render_entry));
        parts.join("\n")
    }

    fn render_header(&self) -> String {
        format!("# {} File List\n", self.title)
    }
}

/// Render a single file block
pub fn render_entry(entry: &FileEntry) -> String {
    match &entry.outcome {
        FileOutcome::Processed(content) => {
            render_content_block(&entry.path, &entry.extension, content)
        }
        FileOutcome::Failed(message) => render_error_block(&entry.path, message),
    }
}

fn render_content_block(path: &Path, extension: &str, content: &str) -> String {
    // content is emitted as-is; a file without a trailing newline puts the
    // closing fence on its last line
    format!(
        "--- File: {} ---\n\n{FENCE} {}\n{}{FENCE}\n",
        path.display(),
        extension,
        content
    )
}

fn render_error_block(path: &Path, message: &str) -> String {
    format!(
        "--- File: {} (ERROR: Could not read) ---\n\n{FENCE}\n[File could not be read: {}]\n{FENCE}\n",
        path.display(),
        message
    )
}

/// Render a document for `title`
pub fn render_document(title: &str, result: &RunResult) -> String {
    Renderer::new(title).render(result)
}
