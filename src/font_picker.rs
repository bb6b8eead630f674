//! The "choose font" command.
//!
//! Presents the fixed candidate list with the current font marked, and on a
//! selection writes the new family to the font preference store.

use thiserror::Error;
use unicode_hover_config::{ConfigError, FONT_CANDIDATES, FontPreferenceStore};

/// Title shown above the candidate list.
pub const PICKER_TITLE: &str = "Select Unicode Preview Font";

/// Errors from applying a font selection.
#[derive(Debug, Error)]
pub enum PickError {
    /// The selection is neither a list index nor a candidate family.
    #[error("unknown font selection {0:?}")]
    UnknownFont(String),

    /// The store could not persist the new family.
    #[error("failed to save font preference: {0}")]
    Store(#[from] ConfigError),
}

/// One row of the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    /// 1-based position in the list.
    pub index: usize,
    pub family: &'static str,
    /// True for the currently configured family.
    pub current: bool,
}

/// Font picker bound to a preference store.
pub struct FontPicker<'a> {
    store: &'a dyn FontPreferenceStore,
}

impl<'a> FontPicker<'a> {
    pub fn new(store: &'a dyn FontPreferenceStore) -> Self {
        Self { store }
    }

    /// Prompt text naming the current font.
    pub fn placeholder(&self) -> String {
        format!("Current font: {}", self.store.get().family)
    }

    /// Candidate rows in display order.
    pub fn items(&self) -> Vec<PickerItem> {
        let current = self.store.get().family;
        FONT_CANDIDATES
            .iter()
            .enumerate()
            .map(|(i, &family)| PickerItem {
                index: i + 1,
                family,
                current: family == current,
            })
            .collect()
    }

    /// Map a selection to a candidate family.
    ///
    /// Accepts a 1-based index or a family name (case-insensitive). An empty
    /// selection means the picker was dismissed.
    pub fn resolve(&self, selection: &str) -> Result<Option<&'static str>, PickError> {
        let selection = selection.trim();
        if selection.is_empty() {
            return Ok(None);
        }

        if let Ok(index) = selection.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| FONT_CANDIDATES.get(i))
                .copied()
                .map(Some)
                .ok_or_else(|| PickError::UnknownFont(selection.to_string()));
        }

        FONT_CANDIDATES
            .iter()
            .find(|family| family.eq_ignore_ascii_case(selection))
            .copied()
            .map(Some)
            .ok_or_else(|| PickError::UnknownFont(selection.to_string()))
    }

    /// Apply a selection. Returns the confirmation message, or `None` when
    /// the picker was dismissed and nothing changed.
    pub fn choose(&self, selection: &str) -> Result<Option<String>, PickError> {
        let Some(family) = self.resolve(selection)? else {
            log::debug!("Font picker dismissed");
            return Ok(None);
        };

        self.store.set(family)?;
        Ok(Some(format!("Unicode preview font set to: {family}")))
    }
}
