//! Core functionality for the page-navigator tool.
//!
//! This module provides the fundamental building blocks for pagination:
//! model construction, HTML rendering, link resolution, label translation,
//! and the surrounding error handling and configuration.

pub mod builder;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod labels;
pub mod links;
pub mod model;
pub mod output;
pub mod renderer;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{PageNavigatorError, Result};

// === Pagination model ===
// Tagged navigation items and the ordered model sequence
pub use model::{prefixed_class, NavItem, NavKind, NavLabel, PaginationModel};

// === Model construction ===
// The link-selection algorithm and its options
pub use builder::{build, BuildOptions};

// === Rendering ===
// Model -> HTML markup
pub use renderer::render;

// === Link resolution ===
// Injected page-URL resolvers
pub use links::{LinkStyle, PageLinks, PathSegmentLinks, QueryStringLinks};

// === Label translation ===
// Injected label translator with English defaults
pub use labels::{LabelKey, LabelSet, Translate};

// === Configuration ===
// Persisted display defaults for the CLI
pub use config::DisplayConfig;

// === Command initialization ===
// Centralized initialization for model-building commands
pub use command_init::{PageCommandArgs, PageCommandContext, PageCommandInit};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header};
