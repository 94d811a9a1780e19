//! HTML rendering for pagination models.
//!
//! This module turns a [`PaginationModel`] into the final `<nav>` markup
//! using single-pass rendering into a pre-allocated buffer. Item order in
//! the output is exactly the model's order; the count summary is
//! special-cased as the first entry and excluded from the general item loop.
//!
//! # Public API
//! - [`render`]: Main rendering function, model + translator → markup string
//!
//! # Markup shape
//! ```text
//! <nav class="pagination" role="navigation">
//! \t<ul>
//! \t\t<li class="count"><span>...</span></li>
//! \t\t<li class="prev"><a href="...">Previous</a></li>
//! \t\t<li><span>3</span></li>
//! \t</ul>
//! </nav>
//! ```
//! Lines are joined with `\n` and there is no trailing newline. Items
//! without a target render as `<span>` text; items with a target render as
//! anchors. The `class` attribute is omitted when the class is empty.

use crate::core::labels::{LabelKey, Translate};
use crate::core::model::{NavItem, NavLabel, PaginationModel};

// Rough per-item line length used to pre-size the output buffer.
const ITEM_LINE_ESTIMATE: usize = 72;

/// Render a pagination model to HTML
///
/// An empty model produces an empty string. Rendering never fails.
pub fn render(model: &PaginationModel, labels: &dyn Translate) -> String {
    if model.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(model.len() * ITEM_LINE_ESTIMATE + 64);
    out.push_str("<nav class=\"pagination\" role=\"navigation\">\n\t<ul>\n");

    if let Some(count) = model.count_item() {
        write_count_line(&mut out, count, labels);
        out.push('\n');
    }

    for item in model.nav_items() {
        write_item_line(&mut out, item);
        out.push('\n');
    }

    out.push_str("\t</ul>\n</nav>");
    out
}

/// Write the non-interactive composite count entry
///
/// Each word and number gets its own `<span>` so callers can style or
/// extract them independently.
fn write_count_line(out: &mut String, item: &NavItem, labels: &dyn Translate) {
    out.push_str("\t\t<li");
    write_class_attr(out, &item.css_class);
    out.push_str("><span>");

    match &item.label {
        NavLabel::Count {
            current_page,
            total_pages,
        } => {
            let mut buf = itoa::Buffer::new();
            out.push_str("<span>");
            out.push_str(labels.translate(LabelKey::Page));
            out.push_str("</span> <span class=\"current_page\">");
            out.push_str(buf.format(*current_page));
            out.push_str("</span> <span>");
            out.push_str(labels.translate(LabelKey::Of));
            out.push_str("</span> <span class=\"total_pages\">");
            out.push_str(buf.format(*total_pages));
            out.push_str("</span>");
        }
        other => write_label(out, other),
    }

    out.push_str("</span></li>");
}

/// Write one regular list entry, span for inert items, anchor for links
fn write_item_line(out: &mut String, item: &NavItem) {
    out.push_str("\t\t<li");
    write_class_attr(out, &item.css_class);
    out.push('>');

    if item.is_interactive() {
        out.push_str("<a href=\"");
        out.push_str(item.target.as_deref().unwrap_or_default());
        out.push_str("\">");
        write_label(out, &item.label);
        out.push_str("</a>");
    } else {
        out.push_str("<span>");
        write_label(out, &item.label);
        out.push_str("</span>");
    }

    out.push_str("</li>");
}

fn write_class_attr(out: &mut String, class: &str) {
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
}

fn write_label(out: &mut String, label: &NavLabel) {
    match label {
        NavLabel::Word(word) => out.push_str(word),
        NavLabel::Page(page) => {
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(*page));
        }
        NavLabel::Count {
            current_page,
            total_pages,
        } => {
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(*current_page));
            out.push_str(" of ");
            out.push_str(buf.format(*total_pages));
        }
    }
}
