//! Configuration system for unicode-hover.
//!
//! This crate provides configuration loading, saving, and default values
//! for the escape-sequence preview. It includes:
//!
//! - The `Config` struct (enabled flag, font family, font size)
//! - YAML persistence with atomic writes and default fallback
//! - The font preference store used by the renderer and the font picker
//! - The fixed list of candidate preview fonts

pub mod config;
pub mod defaults;
pub mod error;
pub mod font_store;
pub mod fonts;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use font_store::{FileFontStore, FontPreference, FontPreferenceStore, MemoryFontStore};
pub use fonts::FONT_CANDIDATES;
