//! Building the preview annotation for a decoded code point.

use crate::block_classifier::classify;
use crate::code_point::CodePoint;
use thiserror::Error;
use unicode_hover_config::FontPreference;

/// Base of the per-character reference link.
pub const REFERENCE_URL_BASE: &str = "https://symbl.cc/en/";

/// Preview content for a displayable code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The rendered character.
    pub glyph: String,
    /// Uppercase hex, zero-padded to at least 4 digits.
    pub hex_label: String,
    /// The code point as a decimal integer.
    pub decimal_label: u32,
    /// Block name from the classifier.
    pub block_label: String,
    /// `https://symbl.cc/en/<hex_label>/`
    pub reference_url: String,
    /// Font the glyph should be drawn with.
    pub font: FontPreference,
}

/// A well-formed escape value that is not a displayable character
/// (a surrogate, or beyond `U+10FFFF`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid Unicode: U+{raw_hex}")]
pub struct InvalidCodePoint {
    /// Uppercase hex of the value, unpadded.
    pub raw_hex: String,
}

impl From<CodePoint> for InvalidCodePoint {
    fn from(code_point: CodePoint) -> Self {
        Self {
            raw_hex: code_point.raw_hex(),
        }
    }
}

/// Reference link for a padded hex label.
pub fn reference_url(hex_label: &str) -> String {
    format!("{REFERENCE_URL_BASE}{hex_label}/")
}

/// Compose the annotation for `code_point` drawn in `font`.
///
/// # Errors
///
/// Returns [`InvalidCodePoint`] when no character exists for the value.
pub fn render(code_point: CodePoint, font: &FontPreference) -> Result<Annotation, InvalidCodePoint> {
    let glyph = code_point.to_char().ok_or_else(|| {
        log::debug!("No glyph for {code_point}");
        InvalidCodePoint::from(code_point)
    })?;

    let hex_label = code_point.hex_label();
    Ok(Annotation {
        glyph: glyph.to_string(),
        reference_url: reference_url(&hex_label),
        hex_label,
        decimal_label: code_point.value(),
        block_label: classify(code_point).into_owned(),
        font: font.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_latin1() {
        let annotation = render(CodePoint::new(0xE9), &FontPreference::default()).unwrap();
        assert_eq!(annotation.glyph, "é");
        assert_eq!(annotation.hex_label, "00E9");
        assert_eq!(annotation.decimal_label, 233);
        assert_eq!(annotation.block_label, "Latin-1 Supplement");
        assert_eq!(annotation.reference_url, "https://symbl.cc/en/00E9/");
        assert_eq!(annotation.font.family, "Arial Unicode MS");
    }

    #[test]
    fn test_render_astral() {
        let annotation = render(CodePoint::new(0x1F600), &FontPreference::default()).unwrap();
        assert_eq!(annotation.glyph, "\u{1F600}");
        assert_eq!(annotation.hex_label, "1F600");
        assert_eq!(annotation.block_label, "Emoticons");
        assert_eq!(annotation.reference_url, "https://symbl.cc/en/1F600/");
    }

    #[test]
    fn test_render_control_character_uses_fallback_block() {
        let annotation = render(CodePoint::new(0x0A), &FontPreference::default()).unwrap();
        assert_eq!(annotation.glyph, "\n");
        assert_eq!(annotation.hex_label, "000A");
        assert_eq!(annotation.block_label, "Unicode Block (U+A)");
    }

    #[test]
    fn test_render_uses_given_font() {
        let font = FontPreference {
            family: "Noto Color Emoji".to_string(),
            size: 32,
        };
        let annotation = render(CodePoint::new(0x41), &font).unwrap();
        assert_eq!(annotation.font, font);
    }

    #[test]
    fn test_render_lone_surrogate_is_invalid() {
        let err = render(CodePoint::new(0xD800), &FontPreference::default()).unwrap_err();
        assert_eq!(err.raw_hex, "D800");
        assert_eq!(err.to_string(), "Invalid Unicode: U+D800");
    }

    #[test]
    fn test_render_out_of_range_is_invalid() {
        let err = render(CodePoint::new(0x110000), &FontPreference::default()).unwrap_err();
        assert_eq!(err.raw_hex, "110000");
    }
}
