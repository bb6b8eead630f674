//! Unicode escape-sequence hover previews.
//!
//! Given source text and a cursor offset, finds an escape token such as
//! `u\1F600`, `\u00e9`, `\x41`, or `0xFF`, decodes it to a code point,
//! names its block, and renders a preview annotation for the host to show.
//!
//! ```
//! use unicode_hover::hover::query;
//! use unicode_hover_config::Config;
//!
//! let hover = query(r"char is \u00e9 today", 10, &Config::default()).unwrap();
//! let annotation = hover.annotation().unwrap();
//! assert_eq!(annotation.hex_label, "00E9");
//! assert_eq!(annotation.block_label, "Latin-1 Supplement");
//! ```

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod annotation;
pub mod block_classifier;
pub mod cli;
pub mod code_point;
pub mod debug;
pub mod escape_decoder;
pub mod font_picker;
pub mod hover;
pub mod markup;
pub mod token_matcher;

// Re-export main types for convenience
pub use annotation::{Annotation, InvalidCodePoint, render};
pub use block_classifier::{BLOCK_RANGES, BlockRange, classify};
pub use code_point::CodePoint;
pub use escape_decoder::{DecodeError, EscapeSyntax, decode};
pub use font_picker::{FontPicker, PickError};
pub use hover::{Hover, HoverContent, query};
pub use markup::MarkupPayload;
pub use token_matcher::{EscapeToken, find_token_at};
