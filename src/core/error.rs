//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PageNavigatorError`] which covers the failure modes
//! of the surrounding tool: configuration discovery, config and label file
//! I/O, and JSON serialization. It uses `thiserror` for ergonomic error
//! definitions and includes specialized error constructors for common
//! failure scenarios.
//!
//! Building and rendering a pagination model never fails: fewer than two
//! total pages is a valid empty result, and out-of-range inputs degrade
//! gracefully. The core API therefore returns plain values, not `Result`.
//!
//! # Public API
//! - [`PageNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PageNavigatorError>`

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for page-navigator
#[derive(Error, Debug)]
pub enum PageNavigatorError {
    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to create config directory '{path}': {source}")]
    ConfigDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Label file errors
    #[error("Label file does not exist: {path}")]
    LabelFileNotFound { path: PathBuf },

    #[error("Failed to read label file '{path}': {source}")]
    LabelFileReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse label file '{path}': {source}")]
    LabelFileParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Generic I/O and serialization errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PageNavigatorError
pub type Result<T> = std::result::Result<T, PageNavigatorError>;

impl PageNavigatorError {
    /// Create a config directory creation failed error
    pub fn config_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::ConfigDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a label file not found error
    pub fn label_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::LabelFileNotFound { path: path.into() }
    }

    /// Create a label file read failed error
    pub fn label_file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LabelFileReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a label file parse failed error
    pub fn label_file_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::LabelFileParseFailed {
            path: path.into(),
            source,
        }
    }
}
