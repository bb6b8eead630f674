//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields, and by `Config::default()`.

pub fn enabled() -> bool {
    true
}

pub fn font_family() -> String {
    "Arial Unicode MS".to_string()
}

pub fn font_size() -> u32 {
    24
}

/// Largest accepted preview font size in pixels.
pub const MAX_FONT_SIZE: u32 = 512;
