//! Decoding of matched escape tokens into code points.

use crate::code_point::CodePoint;
use thiserror::Error;

/// The escape syntax a token was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeSyntax {
    /// `u\1F600`
    UBackslash,
    /// `\u00e9`
    BackslashU,
    /// `\x41`
    BackslashX,
    /// `0xFF`
    HexLiteral,
}

impl EscapeSyntax {
    const ALL: [EscapeSyntax; 4] = [
        EscapeSyntax::UBackslash,
        EscapeSyntax::BackslashU,
        EscapeSyntax::BackslashX,
        EscapeSyntax::HexLiteral,
    ];

    /// The literal prefix that introduces this syntax.
    pub const fn prefix(self) -> &'static str {
        match self {
            EscapeSyntax::UBackslash => "u\\",
            EscapeSyntax::BackslashU => "\\u",
            EscapeSyntax::BackslashX => "\\x",
            EscapeSyntax::HexLiteral => "0x",
        }
    }

    /// Select the syntax by the token's prefix.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|syntax| token.starts_with(syntax.prefix()))
    }
}

/// Reasons a token does not decode to a code point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token does not start with a recognized escape prefix.
    #[error("unrecognized escape prefix in {0:?}")]
    UnknownPrefix(String),

    /// The payload after the prefix is empty or not hexadecimal.
    #[error("malformed hexadecimal payload in {token:?}")]
    MalformedPayload { token: String },

    /// The payload is valid hex but exceeds 32 bits.
    #[error("escape value U+{raw_hex} is too large for a code point")]
    Overflow { raw_hex: String },
}

impl DecodeError {
    /// True for errors that mean "no annotation at all", as opposed to a
    /// well-formed value that simply is not a valid character.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, DecodeError::Overflow { .. })
    }
}

/// Decode an escape token such as `\u00e9` or `0xFF` to its code point.
///
/// No range checking is done: surrogates and values above `0x10FFFF` are
/// returned unchanged.
pub fn decode(token: &str) -> Result<CodePoint, DecodeError> {
    let syntax = EscapeSyntax::from_token(token)
        .ok_or_else(|| DecodeError::UnknownPrefix(token.to_string()))?;
    let payload = &token[syntax.prefix().len()..];

    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::MalformedPayload {
            token: token.to_string(),
        });
    }

    u32::from_str_radix(payload, 16)
        .map(CodePoint::new)
        .map_err(|_| DecodeError::Overflow {
            raw_hex: overflow_hex(payload),
        })
}

/// Uppercase hex for an oversized payload, without leading zeros.
fn overflow_hex(payload: &str) -> String {
    payload.trim_start_matches('0').to_ascii_uppercase()
}
