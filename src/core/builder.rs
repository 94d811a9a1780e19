//! Pagination model construction.
//!
//! This module implements the link-selection algorithm: given a current page,
//! a total page count, and display options, decide exactly which page
//! numbers, edge shortcuts, and directional links appear, in what order,
//! with what classes. It is a pure function of its inputs: no I/O, no
//! ambient state, identical inputs always yield identical models.
//!
//! # Public API
//! - [`BuildOptions`]: Range, visibility flags, and class prefix
//! - [`build`]: `(current_page, total_pages, options, links, labels)` → model
//!
//! # Selection rules
//! - Fewer than two total pages: empty model, nothing to paginate.
//! - A dense window of `2 * range + 1` numbered slots is kept around the
//!   current page; pages outside it are omitted with no gap marker.
//! - Edge and directional links are suppressed whenever the dense window
//!   already covers every page.
//! - An out-of-range current page is not rejected; the selection rules
//!   degrade gracefully and produce whatever they naturally produce.

use crate::core::labels::{LabelKey, Translate};
use crate::core::links::PageLinks;
use crate::core::model::{prefixed_class, NavItem, NavKind, NavLabel, PaginationModel};
use serde::{Deserialize, Serialize};

/// Display options for building a pagination model
///
/// Defaults: range 3, count/directional/edges all shown, no class prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Pages shown before and after the current page
    pub range: usize,
    /// Show the "Page X of Y" summary item
    pub show_count: bool,
    /// Show previous and next page links
    pub show_directional: bool,
    /// Show first and last page links
    pub show_edges: bool,
    /// String prepended to every generated class
    pub class_prefix: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            range: 3,
            show_count: true,
            show_directional: true,
            show_edges: true,
            class_prefix: String::new(),
        }
    }
}

impl BuildOptions {
    /// Size of the dense window of numbered slots around the current page
    pub fn window_size(&self) -> usize {
        2 * self.range + 1
    }
}

/// Build a pagination model for one page of results
///
/// `current_page` of zero means "unset" and is treated as page 1.
/// `total_pages` below 2 yields an empty model.
pub fn build(
    current_page: usize,
    total_pages: usize,
    options: &BuildOptions,
    links: &dyn PageLinks,
    labels: &dyn Translate,
) -> PaginationModel {
    if total_pages < 2 {
        log::debug!("total_pages={total_pages}, nothing to paginate");
        return PaginationModel::new();
    }

    let current_page = current_page.max(1);
    let window = options.window_size();
    // Edge and directional links only make sense once the window no longer
    // covers every page.
    let windowed = window < total_pages;
    let prefix = options.class_prefix.as_str();

    log::debug!(
        "building model: current_page={current_page} total_pages={total_pages} window={window}"
    );

    let mut model = PaginationModel::with_capacity(window.min(total_pages) + 5);

    if options.show_count {
        model.push(NavItem::inert(
            NavKind::Count,
            NavLabel::Count {
                current_page,
                total_pages,
            },
            prefixed_class(prefix, "count"),
        ));
    }

    if options.show_edges && current_page > 2 && current_page > options.range + 1 && windowed {
        model.push(NavItem::linked(
            NavKind::First,
            NavLabel::Word(labels.translate(LabelKey::First).to_string()),
            prefixed_class(prefix, "first"),
            links.resolve(1),
        ));
    }

    if options.show_directional && current_page > 1 && windowed {
        // A zero predecessor yields no target; the item renders inert.
        let target = current_page
            .checked_sub(1)
            .filter(|prev| *prev > 0)
            .map(|prev| links.resolve(prev));
        model.push(NavItem {
            kind: NavKind::Prev,
            label: NavLabel::Word(labels.translate(LabelKey::Previous).to_string()),
            css_class: prefixed_class(prefix, "prev"),
            target,
        });
    }

    for page in 1..=total_pages {
        if page == current_page {
            model.push(NavItem::inert(
                NavKind::Current,
                NavLabel::Page(page),
                prefixed_class(prefix, "current is-active"),
            ));
        } else if total_pages <= window || in_dense_window(page, current_page, options.range) {
            model.push(NavItem::linked(
                NavKind::PageNumber,
                NavLabel::Page(page),
                "",
                links.resolve(page),
            ));
        }
    }

    if options.show_directional && current_page < total_pages && windowed {
        model.push(NavItem::linked(
            NavKind::Next,
            NavLabel::Word(labels.translate(LabelKey::Next).to_string()),
            prefixed_class(prefix, "next"),
            links.resolve(current_page + 1),
        ));
    }

    if options.show_edges
        && current_page + 1 < total_pages
        && current_page + options.range < total_pages + 1
        && windowed
    {
        model.push(NavItem::linked(
            NavKind::Last,
            NavLabel::Word(labels.translate(LabelKey::Last).to_string()),
            prefixed_class(prefix, "last"),
            links.resolve(total_pages),
        ));
    }

    model
}

/// Whether `page` falls inside the dense window around `current_page`
///
/// The window spans `current_page - range ..= current_page + range`, written
/// here in underflow-safe form.
fn in_dense_window(page: usize, current_page: usize, range: usize) -> bool {
    !(page >= current_page + range + 1 || page + range + 1 <= current_page)
}
