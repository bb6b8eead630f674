//! The `CodePoint` value type shared by the decoder, classifier, and renderer.

use std::fmt;

/// A decoded escape value.
///
/// Not clamped to the Unicode range: values above `U+10FFFF` and
/// surrogates are carried as-is and rejected only when a glyph is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// The character for this value, or `None` for surrogates and values
    /// beyond `U+10FFFF`.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Uppercase hex, zero-padded to at least four digits (`00E9`, `1F600`).
    pub fn hex_label(self) -> String {
        format!("{:04X}", self.0)
    }

    /// Uppercase hex without padding (`E9`).
    pub fn raw_hex(self) -> String {
        format!("{:X}", self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<u32> for CodePoint {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{}", self.hex_label())
    }
}
