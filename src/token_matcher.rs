//! Escape-sequence token detection at a cursor position.
//!
//! Recognized syntaxes, tried as alternatives in this order:
//!
//! | Syntax          | Example    |
//! |-----------------|------------|
//! | `u\` + 4-6 hex  | `u\1F600`  |
//! | `\u` + 4 hex    | `\u00e9`   |
//! | `\x` + 2 hex    | `\x41`     |
//! | `0x` + 1+ hex   | `0xFF`     |
//!
//! Offsets are character (Unicode scalar) offsets, not byte offsets.

use regex::Regex;
use std::sync::LazyLock;

/// Escape token pattern. Alternation is leftmost-first, so the order of the
/// alternatives is the tie-break between syntaxes.
static ESCAPE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        u\\[0-9a-fA-F]{4,6}     # u\XXXX .. u\XXXXXX
        | \\u[0-9a-fA-F]{4}     # \uXXXX
        | \\x[0-9a-fA-F]{2}     # \xXX
        | 0x[0-9a-fA-F]+        # 0xX..
        ",
    )
    .expect("escape token regex is a compile-time constant and must be valid")
});

/// A candidate escape sequence and its span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeToken {
    /// The matched text, e.g. `\u00e9`.
    pub text: String,
    /// Start character offset (inclusive).
    pub start: usize,
    /// End character offset (exclusive). Always greater than `start`.
    pub end: usize,
}

impl EscapeToken {
    /// Check if a character offset falls on this token. The offset directly
    /// after the last character counts, matching editor word-range lookups.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Find the escape token at `offset` in `text`.
///
/// Only the line containing `offset` is searched. Returns `None` when the
/// offset is past the end of the text or no token covers it.
pub fn find_token_at(text: &str, offset: usize) -> Option<EscapeToken> {
    let byte_offset = char_to_byte_offset(text, offset)?;

    let line_start = text[..byte_offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[byte_offset..]
        .find('\n')
        .map_or(text.len(), |i| byte_offset + i);
    let line = &text[line_start..line_end];
    let column = byte_offset - line_start;

    for mat in ESCAPE_TOKEN_REGEX.find_iter(line) {
        if mat.start() > column {
            break;
        }
        if column <= mat.end() {
            let start = offset - line[mat.start()..column].chars().count();
            let token = EscapeToken {
                text: mat.as_str().to_string(),
                start,
                end: start + mat.as_str().chars().count(),
            };
            log::trace!("Escape token {:?} at offset {}", token.text, offset);
            return Some(token);
        }
    }

    None
}

/// Find every escape token in `text`, in order of appearance.
pub fn find_all_tokens(text: &str) -> Vec<EscapeToken> {
    let mut tokens = Vec::new();
    let mut chars_before = 0;
    let mut last_byte = 0;

    for mat in ESCAPE_TOKEN_REGEX.find_iter(text) {
        chars_before += text[last_byte..mat.start()].chars().count();
        let len = mat.as_str().chars().count();
        tokens.push(EscapeToken {
            text: mat.as_str().to_string(),
            start: chars_before,
            end: chars_before + len,
        });
        chars_before += len;
        last_byte = mat.end();
    }

    tokens
}

/// Convert a character offset to a byte offset. The offset one past the
/// last character maps to `text.len()`.
fn char_to_byte_offset(text: &str, offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(offset)
}
