//! Font preference storage.
//!
//! The renderer reads the current [`FontPreference`] on every hover; the
//! font picker writes a new family. Two stores are provided:
//!
//! - [`MemoryFontStore`] keeps the preference in process memory.
//! - [`FileFontStore`] persists it in a YAML config file, re-reading the
//!   file on each `get` so edits made elsewhere are picked up.

use crate::config::Config;
use crate::config::config_methods::validate_font_family;
use crate::error::ConfigError;
use parking_lot::RwLock;
use serde_yaml_ng::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Font used to draw the previewed glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontPreference {
    /// CSS font family name.
    pub family: String,
    /// Base size in pixels.
    pub size: u32,
}

impl Default for FontPreference {
    fn default() -> Self {
        Self {
            family: crate::defaults::font_family(),
            size: crate::defaults::font_size(),
        }
    }
}

/// Read/write access to the persisted font preference.
///
/// After a successful `set(f)`, `get()` returns family `f` until the next
/// `set`.
pub trait FontPreferenceStore: Send + Sync {
    /// Current font preference.
    fn get(&self) -> FontPreference;

    /// Replace the font family. The size is left unchanged.
    fn set(&self, family: &str) -> Result<(), ConfigError>;
}

/// In-process font preference store.
#[derive(Debug, Default)]
pub struct MemoryFontStore {
    preference: RwLock<FontPreference>,
}

impl MemoryFontStore {
    pub fn new(preference: FontPreference) -> Self {
        Self {
            preference: RwLock::new(preference),
        }
    }
}

impl FontPreferenceStore for MemoryFontStore {
    fn get(&self) -> FontPreference {
        self.preference.read().clone()
    }

    fn set(&self, family: &str) -> Result<(), ConfigError> {
        validate_font_family(family)?;
        self.preference.write().family = family.to_string();
        Ok(())
    }
}

/// Font preference store backed by a YAML config file.
#[derive(Debug, Clone)]
pub struct FileFontStore {
    path: PathBuf,
}

impl FileFontStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the default config path.
    pub fn default_location() -> Self {
        Self::new(Config::config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FontPreferenceStore for FileFontStore {
    fn get(&self) -> FontPreference {
        Config::load_or_default(&self.path).font_preference()
    }

    fn set(&self, family: &str) -> Result<(), ConfigError> {
        validate_font_family(family)?;

        // A config file that exists but does not parse is left untouched.
        Config::load_from(&self.path)?;

        let mut document = self.read_document()?;
        document.insert(
            Value::String("font_family".to_string()),
            Value::String(family.to_string()),
        );
        let yaml = serde_yaml_ng::to_string(&document)?;
        Config::write_atomic(&self.path, &yaml)?;

        log::info!("Preview font set to {family:?} in {:?}", self.path);
        Ok(())
    }
}

impl FileFontStore {
    /// The config file as a raw YAML mapping, so keys this crate does not
    /// know about survive a rewrite. A missing or empty file yields the
    /// default config.
    fn read_document(&self) -> Result<Mapping, ConfigError> {
        let contents = if self.path.exists() {
            fs::read_to_string(&self.path)?
        } else {
            String::new()
        };
        if contents.trim().is_empty() {
            return match serde_yaml_ng::to_value(Config::default())? {
                Value::Mapping(map) => Ok(map),
                _ => Ok(Mapping::new()),
            };
        }

        match serde_yaml_ng::from_str::<Value>(&contents)? {
            Value::Mapping(map) => Ok(map),
            Value::Null => Ok(Mapping::new()),
            _ => Err(ConfigError::Validation(format!(
                "config file {:?} is not a YAML mapping",
                self.path
            ))),
        }
    }
}
