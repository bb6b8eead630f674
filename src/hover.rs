//! The hover query pipeline: match → decode → classify → render.
//!
//! The host calls [`query`] with the document text and cursor offset each
//! time it wants a preview. Every call is independent; nothing is cached.

use crate::annotation::{Annotation, InvalidCodePoint, render};
use crate::escape_decoder::{DecodeError, decode};
use crate::markup::{MarkupPayload, invalid_markup, preview_markup};
use crate::token_matcher::{EscapeToken, find_token_at};
use unicode_hover_config::{Config, FontPreference};

/// What to show for a recognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverContent {
    /// Full preview for a displayable character.
    Preview(Annotation),
    /// Degraded result for a value with no character.
    Invalid(InvalidCodePoint),
}

/// A preview anchored at the token's span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub span: EscapeToken,
    pub content: HoverContent,
}

impl Hover {
    /// Markup payload for the host to display.
    pub fn markup(&self) -> MarkupPayload {
        match &self.content {
            HoverContent::Preview(annotation) => preview_markup(annotation),
            HoverContent::Invalid(invalid) => invalid_markup(invalid),
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match &self.content {
            HoverContent::Preview(annotation) => Some(annotation),
            HoverContent::Invalid(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.content, HoverContent::Invalid(_))
    }
}

/// Preview for the escape token at `offset`, if any.
///
/// Returns `None` when the preview is disabled, when no token covers the
/// offset, or when the token's payload does not decode.
pub fn query(text: &str, offset: usize, config: &Config) -> Option<Hover> {
    if !config.enabled {
        log::trace!("Hover preview disabled");
        return None;
    }
    query_with_font(text, offset, &config.font_preference())
}

/// Like [`query`] but without the enabled check, using `font` directly.
pub fn query_with_font(text: &str, offset: usize, font: &FontPreference) -> Option<Hover> {
    let token = find_token_at(text, offset)?;
    let content = hover_content(&token.text, font)?;
    Some(Hover {
        span: token,
        content,
    })
}

/// Decode and render a single token's text.
///
/// Returns `None` for malformed tokens; oversized values render as
/// [`HoverContent::Invalid`].
pub fn hover_content(token: &str, font: &FontPreference) -> Option<HoverContent> {
    let code_point = match decode(token) {
        Ok(code_point) => code_point,
        Err(DecodeError::Overflow { raw_hex }) => {
            log::debug!("Escape {token:?} overflows a code point");
            return Some(HoverContent::Invalid(InvalidCodePoint { raw_hex }));
        }
        Err(e) => {
            log::debug!("Ignoring escape token: {e}");
            return None;
        }
    };

    Some(match render(code_point, font) {
        Ok(annotation) => HoverContent::Preview(annotation),
        Err(invalid) => HoverContent::Invalid(invalid),
    })
}
