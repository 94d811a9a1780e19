use crate::core::builder::BuildOptions;
use crate::core::dirs::get_config_directory;
use crate::core::error::PageNavigatorError;
use crate::core::labels::LabelSet;
use crate::core::links::LinkStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted display defaults for the CLI.
///
/// Command-line flags override whatever is stored here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub options: BuildOptions,
    pub link_style: LinkStyle,
    pub link_base: String,
    pub labels: LabelSet,
}

impl DisplayConfig {
    pub fn load_or_create() -> Result<Self, PageNavigatorError> {
        let config_dir = get_config_directory()?;
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            let config = Self::default();
            std::fs::create_dir_all(&config_dir).map_err(|source| {
                PageNavigatorError::config_directory_creation_failed(&config_dir, source)
            })?;
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PageNavigatorError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| PageNavigatorError::config_read_failed(path, source))?;
        serde_json::from_str(&content)
            .map_err(|source| PageNavigatorError::config_parse_failed(path, source))
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PageNavigatorError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|source| PageNavigatorError::config_write_failed(path, source))
    }
}
