//! Token counting for packed documents
//!
//! Uses tiktoken (cl100k_base by default) so `--stats` can tell how much of a
//! model's context window a pack will take. Falls back to a run-based
//! heuristic when an encoding cannot be loaded.

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use tiktoken_rs::{cl100k_base, o200k_base, CoreBPE};

/// Supported token encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenModel {
    /// cl100k_base (GPT-4, GPT-3.5-turbo; a fair approximation for Claude)
    #[default]
    Cl100k,
    /// o200k_base (GPT-4o)
    O200k,
    /// Fast heuristic estimation (no BPE encoding)
    Heuristic,
}

impl TokenModel {
    fn get_bpe(&self) -> Option<&'static CoreBPE> {
        match self {
            TokenModel::Cl100k => CL100K_BPE.as_ref().ok(),
            TokenModel::O200k => O200K_BPE.as_ref().ok(),
            TokenModel::Heuristic => None,
        }
    }

    pub fn available_models() -> &'static [&'static str] {
        &["cl100k", "o200k", "heuristic"]
    }
}

impl fmt::Display for TokenModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenModel::Cl100k => "cl100k",
            TokenModel::O200k => "o200k",
            TokenModel::Heuristic => "heuristic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TokenModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cl100k" | "cl100k_base" | "gpt4" | "claude" | "default" => Ok(TokenModel::Cl100k),
            "o200k" | "o200k_base" | "gpt4o" => Ok(TokenModel::O200k),
            "heuristic" | "fast" | "estimate" => Ok(TokenModel::Heuristic),
            _ => Err(format!(
                "Unknown model: {}. Available: {}",
                s,
                TokenModel::available_models().join(", ")
            )),
        }
    }
}

// Loaded once on first use
static CL100K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| cl100k_base().map_err(|e| format!("Failed to load cl100k_base: {}", e)));

static O200K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| o200k_base().map_err(|e| format!("Failed to load o200k_base: {}", e)));

/// Count tokens in text with the given model
pub fn count_tokens(text: &str, model: TokenModel) -> usize {
    if text.is_empty() {
        return 0;
    }

    match model.get_bpe() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => estimate_tokens_heuristic(text),
    }
}

/// Character classes the heuristic splits packed source into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Identifier characters: ASCII letters, digits, `_` and `$`
    Word,
    /// Operators, brackets and YAML/properties separators
    Punct,
    LineBreak,
    /// Spaces and tabs, folded into the following token
    Blank,
    NonAscii,
}

fn classify(c: char) -> CharClass {
    match c {
        '\n' | '\r' => CharClass::LineBreak,
        c if c.is_whitespace() => CharClass::Blank,
        c if c.is_ascii_alphanumeric() || c == '_' || c == '$' => CharClass::Word,
        c if c.is_ascii() => CharClass::Punct,
        _ => CharClass::NonAscii,
    }
}

/// A maximal run of one character class
struct Run {
    class: CharClass,
    len: usize,
    /// camelCase segments seen in a word run
    segments: usize,
}

impl Run {
    fn tokens(&self) -> usize {
        match self.class {
            // `getUserName` splits per segment; long lowercase words per 6 chars
            CharClass::Word => self.segments.max(self.len.div_ceil(6)),
            CharClass::Punct => self.len.div_ceil(2),
            CharClass::LineBreak => 1,
            CharClass::Blank => 0,
            CharClass::NonAscii => self.len,
        }
    }
}

/// Estimate tokens without a BPE encoding.
///
/// Tuned for packed Java and config files: identifiers cost one token per
/// camelCase segment, punctuation about one per two characters, each line
/// break one, and blanks nothing.
pub fn estimate_tokens_heuristic(text: &str) -> usize {
    let mut total = 0usize;
    let mut current: Option<Run> = None;
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let class = classify(c);
        let extends = current.as_ref().is_some_and(|run| run.class == class);

        if extends {
            if let Some(run) = current.as_mut() {
                run.len += 1;
                if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
                    run.segments += 1;
                }
            }
        } else {
            total += current.map_or(0, |run| run.tokens());
            current = Some(Run {
                class,
                len: 1,
                segments: 1,
            });
        }
        prev = Some(c);
    }

    total + current.map_or(0, |run| run.tokens())
}
