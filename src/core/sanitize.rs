//! Content sanitizer
//!
//! Strips comments with fixed, regex-based rules and collapses runs of
//! spaces. The rules are heuristics: they know nothing about string
//! literals, so `"http://host"` in Java loses everything after `http:`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;

use crate::core::model::extension_of;

/// `/* ... */`, non-greedy, may span lines
static BLOCK_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid BLOCK_COMMENT_RE regex"));

/// `//` up to (not including) the line terminator
static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"//[^\r\n\x{2028}\x{2029}]*").expect("Invalid LINE_COMMENT_RE regex")
});

/// A line whose first non-whitespace character is `#`.
/// `\s` also spans newlines, so blank lines directly above are swallowed too.
/// A byte order mark counts as leading whitespace.
static HASH_COMMENT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^[\s\x{FEFF}]*#[^\r\n\x{2028}\x{2029}]*")
        .expect("Invalid HASH_COMMENT_LINE_RE regex")
});

/// One or more literal spaces (tabs are left alone)
static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +").expect("Invalid SPACE_RUN_RE regex"));

const COLLAPSED_SPACES: &str = "  ";

/// Comment grammar applied to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* */` blocks and `//` lines (Java)
    CStyle,
    /// Whole `#` lines (YAML, properties)
    Hash,
    /// No stripping
    Verbatim,
}

impl CommentStyle {
    /// Pick a style from a lowercase extension without the dot
    pub fn for_extension(ext: &str) -> Self {
        match ext {
            "java" => CommentStyle::CStyle,
            "yml" | "yaml" | "properties" => CommentStyle::Hash,
            _ => CommentStyle::Verbatim,
        }
    }

    pub fn for_path(path: &Path) -> Self {
        Self::for_extension(&extension_of(path))
    }

    /// Remove comments according to this style
    pub fn strip<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match self {
            CommentStyle::CStyle => {
                let without_blocks = BLOCK_COMMENT_RE.replace_all(content, "");
                Cow::Owned(LINE_COMMENT_RE.replace_all(&without_blocks, "").into_owned())
            }
            CommentStyle::Hash => HASH_COMMENT_LINE_RE.replace_all(content, ""),
            CommentStyle::Verbatim => Cow::Borrowed(content),
        }
    }
}

/// Strip comments for the file's type, then collapse spaces
pub fn sanitize(content: &str, path: &Path) -> String {
    let stripped = CommentStyle::for_path(path).strip(content);
    collapse_spaces(&stripped).into_owned()
}

/// Replace every run of one or more spaces with exactly two.
///
/// This does not preserve indentation; a single space also becomes two.
pub fn collapse_spaces(text: &str) -> Cow<'_, str> {
    SPACE_RUN_RE.replace_all(text, COLLAPSED_SPACES)
}
