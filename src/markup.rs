//! Markup payloads handed to the host for display.
//!
//! A preview is an HTML block with inline styling and a clickable reference
//! link, flagged as trusted. The invalid-code-point fallback is plain
//! markdown and is not trusted.

use crate::annotation::{Annotation, InvalidCodePoint};

/// Fallback family appended after the configured font.
const GENERIC_FONT_FAMILY: &str = "sans-serif";

/// Content plus the flags the host needs to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupPayload {
    pub body: String,
    /// Body contains HTML that should be rendered, not escaped.
    pub supports_html: bool,
    /// Links in the body may be followed without confirmation.
    pub is_trusted: bool,
}

/// HTML preview block for an annotation.
pub fn preview_markup(annotation: &Annotation) -> MarkupPayload {
    let family = escape_html(&annotation.font.family);
    let size = annotation.font.size;
    let glyph_size = size.saturating_mul(2);

    let body = format!(
        concat!(
            "<div style=\"font-family: '{family}', {generic}; font-size: {size}px; text-align: center; padding: 10px;\">\n",
            "<div style=\"font-size: {glyph_size}px; margin-bottom: 10px;\">{glyph}</div>\n",
            "<div style=\"font-size: 12px; color: #888;\">\n",
            "<strong>Unicode:</strong> U+{hex}<br />\n",
            "<strong>Decimal:</strong> {decimal}<br />\n",
            "<strong>Character:</strong> {block}<br />\n",
            "<strong>See:</strong><a href=\"{url}\" target=\"_blank\"> symbl.cc</a>\n",
            "</div>\n",
            "</div>",
        ),
        family = family,
        generic = GENERIC_FONT_FAMILY,
        size = size,
        glyph_size = glyph_size,
        glyph = escape_html(&annotation.glyph),
        hex = annotation.hex_label,
        decimal = annotation.decimal_label,
        block = escape_html(&annotation.block_label),
        url = annotation.reference_url,
    );

    MarkupPayload {
        body,
        supports_html: true,
        is_trusted: true,
    }
}

/// Markdown fallback for a value with no displayable character.
pub fn invalid_markup(invalid: &InvalidCodePoint) -> MarkupPayload {
    MarkupPayload {
        body: format!("**Invalid Unicode:** U+{}", invalid.raw_hex),
        supports_html: false,
        is_trusted: false,
    }
}

/// Escape text for inclusion in HTML content or a quoted attribute.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
