//! Common assertion helpers for test output validation
//!
//! Provides predicates and assertion utilities for validating page-navigator
//! command output, error messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the navigation container
pub fn has_nav_container() -> impl Predicate<str> {
    predicates::str::contains("<nav class=\"pagination\" role=\"navigation\">")
}

/// Creates a predicate that checks for the non-interactive current page entry
pub fn has_current_page(page: usize) -> impl Predicate<str> {
    predicates::str::contains(format!(
        "<li class=\"current is-active\"><span>{}</span></li>",
        page
    ))
}

/// Creates a predicate that checks for an anchor with the given href
pub fn has_link_to(href: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("<a href=\"{}\">", href))
}

/// Creates a predicate that checks for a list entry class
pub fn has_item_class(class: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("<li class=\"{}\">", class))
}

/// Creates a predicate that checks for the page count summary
pub fn has_count_summary(current: usize, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("<span class=\"current_page\">{}</span>", current)).and(
        predicates::str::contains(format!("<span class=\"total_pages\">{}</span>", total)),
    )
}

/// Creates a predicate that checks for label-file error messages
pub fn label_file_error() -> impl Predicate<str> {
    predicates::str::contains("Label file does not exist")
        .or(predicates::str::contains("Failed to parse label file"))
}
