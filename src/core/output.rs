//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for page-navigator
//! diagnostics. Rendered markup and model dumps go to stdout untouched so
//! they can be piped; everything here is for the human-facing messages
//! around them.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, white for messages
//! - **Standardized spacing**: Newline before and after all messages
//! - **Pipe-safe**: Never used for the markup/JSON payload itself

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
