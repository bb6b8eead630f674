//! Core `Config` struct definition.
//!
//! The host owns these settings; the preview pipeline only reads them.
//! Every field carries a serde default so a partial (or empty) YAML file
//! yields the documented defaults for anything it omits.

use serde::{Deserialize, Serialize};

/// Settings read by every hover query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Master switch. When false, queries return no annotation at all.
    #[serde(default = "crate::defaults::enabled")]
    pub enabled: bool,

    /// Font family used to draw the previewed glyph.
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Base font size in pixels. The glyph itself is drawn at twice this size.
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: crate::defaults::enabled(),
            font_family: crate::defaults::font_family(),
            font_size: crate::defaults::font_size(),
        }
    }
}
