//! Page Navigator - A lightweight Rust library and CLI for building and rendering pagination menus.
//!
//! This library computes a pagination model (which page links, edge and
//! directional controls, and page-count summary to show for a given current
//! page and total page count) and renders it to HTML markup. It is designed
//! to be fast, type-safe, and dependency-injected: page-link URLs and label
//! translations come from caller-supplied collaborators.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Pagination model construction ([`build`], [`BuildOptions`])
//! - HTML rendering ([`render`])
//! - Link resolution and label translation traits
//! - Error handling and result types
//! - Display configuration persistence

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    build,

    prefixed_class,
    // Rendering
    render,

    BuildOptions,

    DisplayConfig,

    LabelKey,
    // Label translation
    LabelSet,
    LinkStyle,
    // Pagination model
    NavItem,
    NavKind,
    NavLabel,
    // Error handling
    PageNavigatorError,

    // Link resolution
    PageLinks,
    PaginationModel,
    PathSegmentLinks,
    QueryStringLinks,
    Result,
    Translate,
};
