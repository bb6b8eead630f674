//! Builder helpers, validation, and font preference access for `Config`.

use super::config_struct::Config;
use crate::defaults::MAX_FONT_SIZE;
use crate::error::ConfigError;
use crate::font_store::FontPreference;

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the preview
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the preview font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the preview font size
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// The font preference the renderer should use for this config.
    pub fn font_preference(&self) -> FontPreference {
        FontPreference {
            family: self.font_family.clone(),
            size: self.font_size,
        }
    }

    /// Check field values that serde cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for a blank font family or a font
    /// size outside `1..=MAX_FONT_SIZE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_font_family(&self.font_family)?;
        if self.font_size == 0 || self.font_size > MAX_FONT_SIZE {
            return Err(ConfigError::Validation(format!(
                "font_size must be between 1 and {MAX_FONT_SIZE}, got {}",
                self.font_size
            )));
        }
        Ok(())
    }

    /// Reset any invalid field to its default, logging what was replaced.
    pub fn sanitize(&mut self) {
        if let Err(e) = validate_font_family(&self.font_family) {
            log::warn!("{e}; using default font family");
            self.font_family = crate::defaults::font_family();
        }
        if self.font_size == 0 || self.font_size > MAX_FONT_SIZE {
            log::warn!(
                "Config font_size {} is out of range; using default {}",
                self.font_size,
                crate::defaults::font_size()
            );
            self.font_size = crate::defaults::font_size();
        }
    }
}

/// Reject blank font family names.
pub(crate) fn validate_font_family(family: &str) -> Result<(), ConfigError> {
    if family.trim().is_empty() {
        return Err(ConfigError::Validation(
            "font_family must not be empty".to_string(),
        ));
    }
    Ok(())
}
