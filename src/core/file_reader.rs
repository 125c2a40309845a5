//! Source file reading
//!
//! Reads a file's bytes and decodes them into text without ever failing on
//! encoding: encoded lone UTF-16 surrogates are removed first, and any other
//! invalid UTF-8 is replaced lossily. Only I/O errors are reported.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Lead byte shared by every three-byte encoding of U+D800..=U+DFFF
const SURROGATE_LEAD: u8 = 0xED;

/// Read a file and decode it for sanitizing
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_source(&bytes))
}

/// Decode raw bytes into text, dropping lone surrogates
pub fn decode_source(bytes: &[u8]) -> String {
    let cleaned = strip_surrogates(bytes);
    String::from_utf8_lossy(&cleaned).into_owned()
}

/// Remove surrogate code units encoded as `ED A0..=BF 80..=BF`.
///
/// `0xED` never appears as a continuation byte, so a plain forward scan
/// cannot split a valid sequence.
pub fn strip_surrogates(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !has_surrogate_at_any(bytes) {
        return Cow::Borrowed(bytes);
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if is_surrogate_at(bytes, i) {
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Cow::Owned(out)
}

fn has_surrogate_at_any(bytes: &[u8]) -> bool {
    (0..bytes.len()).any(|i| is_surrogate_at(bytes, i))
}

#[inline]
fn is_surrogate_at(bytes: &[u8], i: usize) -> bool {
    bytes.len() >= i + 3
        && bytes[i] == SURROGATE_LEAD
        && (0xA0..=0xBF).contains(&bytes[i + 1])
        && (0x80..=0xBF).contains(&bytes[i + 2])
}
