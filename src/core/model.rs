//! Type-safe pagination model data structures.
//!
//! This module defines [`NavItem`] which replaces loosely-typed per-item
//! records with a proper tagged structure, and [`PaginationModel`], the
//! ordered sequence of items a renderer consumes. Insertion order is display
//! order; the model is never mutated after construction.
//!
//! # Public API
//! - [`NavKind`]: Enumeration of all navigation item kinds
//! - [`NavLabel`]: Display text of an item (word, page number, or page count)
//! - [`NavItem`]: A single navigation entry with class and optional target
//! - [`PaginationModel`]: Ordered sequence of [`NavItem`]s

use serde::Serialize;
use std::fmt;

/// Kind tag for a navigation item
///
/// Exhaustive matching on this enum replaces the duck-typed field access a
/// string-keyed item map would require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
    /// "Page X of Y" summary item
    Count,
    /// Shortcut link to page 1
    First,
    /// Link to the previous page
    Prev,
    /// Plain numbered page link
    PageNumber,
    /// The current page (non-interactive)
    Current,
    /// Link to the next page
    Next,
    /// Shortcut link to the last page
    Last,
}

/// Display text of a navigation item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavLabel {
    /// A translated word such as "Previous" or "Last"
    Word(String),
    /// A bare page number
    Page(usize),
    /// The current-page / total-pages pair of the count item
    Count {
        current_page: usize,
        total_pages: usize,
    },
}

impl fmt::Display for NavLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavLabel::Word(word) => f.write_str(word),
            NavLabel::Page(page) => write!(f, "{page}"),
            NavLabel::Count {
                current_page,
                total_pages,
            } => write!(f, "{current_page} of {total_pages}"),
        }
    }
}

/// A single navigational entry
///
/// `target` is `None` for non-interactive items (the current page, or the
/// count summary); such items render as inert text rather than links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub kind: NavKind,
    pub label: NavLabel,
    /// Final class string, prefix already applied. Empty for plain
    /// numbered links.
    pub css_class: String,
    pub target: Option<String>,
}

impl NavItem {
    /// Create a non-interactive item (no target)
    pub fn inert(kind: NavKind, label: NavLabel, css_class: impl Into<String>) -> Self {
        Self {
            kind,
            label,
            css_class: css_class.into(),
            target: None,
        }
    }

    /// Create a linked item
    pub fn linked(
        kind: NavKind,
        label: NavLabel,
        css_class: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label,
            css_class: css_class.into(),
            target: Some(target.into()),
        }
    }

    /// Whether the item renders as a link
    pub fn is_interactive(&self) -> bool {
        self.target.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Prepend a class prefix to a semantic class suffix
///
/// The prefix applies to the suffix string as a whole, so with prefix "pg-"
/// the current item's class becomes "pg-current is-active".
pub fn prefixed_class(prefix: &str, suffix: &str) -> String {
    let mut class = String::with_capacity(prefix.len() + suffix.len());
    class.push_str(prefix);
    class.push_str(suffix);
    class
}

/// Ordered sequence of navigation items, insertion order = display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationModel {
    items: Vec<NavItem>,
}

impl PaginationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, item: NavItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate items in display order
    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.items.iter()
    }

    /// The count summary item, if the model carries one
    ///
    /// A renderer special-cases this item and skips it during the general
    /// iteration, so it is exposed separately.
    pub fn count_item(&self) -> Option<&NavItem> {
        self.items.first().filter(|item| item.kind == NavKind::Count)
    }

    /// Iterate every item except the count summary, in display order
    pub fn nav_items(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter().filter(|item| item.kind != NavKind::Count)
    }
}

impl<'a> IntoIterator for &'a PaginationModel {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_item(page: usize) -> NavItem {
        NavItem::linked(
            NavKind::PageNumber,
            NavLabel::Page(page),
            "",
            format!("?paged={page}"),
        )
    }

    #[test]
    fn test_empty_model() {
        let model = PaginationModel::new();
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
        assert!(model.count_item().is_none());
    }

    #[test]
    fn test_insertion_order_is_iteration_order() {
        let mut model = PaginationModel::new();
        model.push(page_item(2));
        model.push(page_item(3));
        model.push(page_item(4));

        let labels: Vec<&NavLabel> = model.iter().map(|item| &item.label).collect();
        assert_eq!(
            labels,
            vec![&NavLabel::Page(2), &NavLabel::Page(3), &NavLabel::Page(4)]
        );
    }

    #[test]
    fn test_count_item_only_when_first() {
        let mut model = PaginationModel::new();
        model.push(NavItem::inert(
            NavKind::Count,
            NavLabel::Count {
                current_page: 2,
                total_pages: 9,
            },
            "count",
        ));
        model.push(page_item(1));

        let count = model.count_item().expect("count item present");
        assert_eq!(count.kind, NavKind::Count);
        assert_eq!(model.nav_items().count(), 1);
    }

    #[test]
    fn test_nav_items_skips_count() {
        let mut model = PaginationModel::new();
        model.push(NavItem::inert(
            NavKind::Count,
            NavLabel::Count {
                current_page: 1,
                total_pages: 3,
            },
            "count",
        ));
        model.push(page_item(2));
        model.push(page_item(3));

        assert_eq!(model.len(), 3);
        assert!(model.nav_items().all(|item| item.kind != NavKind::Count));
    }

    #[test]
    fn test_is_interactive() {
        assert!(page_item(1).is_interactive());

        let current = NavItem::inert(NavKind::Current, NavLabel::Page(1), "current is-active");
        assert!(!current.is_interactive());

        let empty_target = NavItem::linked(NavKind::Prev, NavLabel::Word("Previous".into()), "prev", "");
        assert!(!empty_target.is_interactive());
    }

    #[test]
    fn test_prefixed_class() {
        assert_eq!(prefixed_class("", "first"), "first");
        assert_eq!(prefixed_class("pg-", "last"), "pg-last");
        assert_eq!(
            prefixed_class("pg-", "current is-active"),
            "pg-current is-active"
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(NavLabel::Word("Next".into()).to_string(), "Next");
        assert_eq!(NavLabel::Page(42).to_string(), "42");
    }

    #[test]
    fn test_model_serializes_to_json() {
        let mut model = PaginationModel::new();
        model.push(page_item(2));

        let json = serde_json::to_value(&model).expect("model serializes");
        assert_eq!(json["items"][0]["kind"], "page_number");
        assert_eq!(json["items"][0]["label"], 2);
    }
}
