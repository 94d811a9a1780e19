//! Navigation label translation.
//!
//! The builder and renderer never hardcode language-specific text; every
//! user-visible word goes through a [`Translate`] implementation keyed by
//! [`LabelKey`]. [`LabelSet`] is the stock implementation: English defaults,
//! optionally overridden per key from a JSON file, so a missing key in a
//! translation file falls back to the default word rather than failing.
//!
//! # Public API
//! - [`LabelKey`]: The six translatable words
//! - [`Translate`]: Translator capability the core calls by key
//! - [`LabelSet`]: Default implementation with JSON-loadable overrides

use crate::core::error::{PageNavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The translatable words used by pagination items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    First,
    Previous,
    Next,
    Last,
    Page,
    Of,
}

/// Translator capability injected into the builder and renderer
pub trait Translate {
    fn translate(&self, key: LabelKey) -> &str;
}

/// Label words with English defaults
///
/// Each field defaults independently, so a partial translation file only
/// overrides the keys it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSet {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
    pub page: String,
    pub of: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            first: "First".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            last: "Last".to_string(),
            page: "Page".to_string(),
            of: "of".to_string(),
        }
    }
}

impl LabelSet {
    /// Load a label set from a JSON file
    ///
    /// Keys absent from the file keep their English defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PageNavigatorError::label_file_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| PageNavigatorError::label_file_read_failed(path, source))?;
        serde_json::from_str(&content)
            .map_err(|source| PageNavigatorError::label_file_parse_failed(path, source))
    }
}

impl Translate for LabelSet {
    fn translate(&self, key: LabelKey) -> &str {
        match key {
            LabelKey::First => &self.first,
            LabelKey::Previous => &self.previous,
            LabelKey::Next => &self.next,
            LabelKey::Last => &self.last,
            LabelKey::Page => &self.page,
            LabelKey::Of => &self.of,
        }
    }
}
