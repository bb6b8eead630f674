//! Coarse block names for code points.
//!
//! This is a small display-grouping table, not the Unicode Blocks standard.
//! Entries may overlap; the first entry containing the code point wins.

use crate::code_point::CodePoint;
use std::borrow::Cow;

/// An inclusive code point range with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub low: u32,
    pub high: u32,
    pub label: &'static str,
}

impl BlockRange {
    pub const fn new(low: u32, high: u32, label: &'static str) -> Self {
        Self { low, high, label }
    }

    pub const fn contains(&self, code_point: CodePoint) -> bool {
        self.low <= code_point.value() && code_point.value() <= self.high
    }
}

/// Block table, scanned in order.
pub const BLOCK_RANGES: &[BlockRange] = &[
    BlockRange::new(0x0020, 0x007F, "ASCII Character"),
    BlockRange::new(0x00A0, 0x00FF, "Latin-1 Supplement"),
    BlockRange::new(0x0100, 0x017F, "Latin Extended-A"),
    BlockRange::new(0x0180, 0x024F, "Latin Extended-B"),
    BlockRange::new(0x2000, 0x206F, "General Punctuation"),
    BlockRange::new(0x2190, 0x21FF, "Arrows"),
    BlockRange::new(0x2200, 0x22FF, "Mathematical Operators"),
    BlockRange::new(0x1F600, 0x1F64F, "Emoticons"),
    BlockRange::new(0x1F300, 0x1F5FF, "Miscellaneous Symbols"),
];

/// Label for `code_point` from [`BLOCK_RANGES`].
pub fn classify(code_point: CodePoint) -> Cow<'static, str> {
    classify_in(BLOCK_RANGES, code_point)
}

/// Label for `code_point` from an arbitrary ordered table.
///
/// Falls back to `Unicode Block (U+<HEX>)` with unpadded uppercase hex when
/// no entry contains the code point.
pub fn classify_in(table: &[BlockRange], code_point: CodePoint) -> Cow<'static, str> {
    table
        .iter()
        .find(|range| range.contains(code_point))
        .map(|range| Cow::Borrowed(range.label))
        .unwrap_or_else(|| Cow::Owned(format!("Unicode Block (U+{})", code_point.raw_hex())))
}
