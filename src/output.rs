//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Window
//!
//! ```text
//! Page 1 of 11
//!     Pages: [1] 2 3 4 5 6 7 … 11
//!     Previous: disabled
//!     Next: page 2
//! ```
//!
//! ## Listing
//!
//! ```text
//! 85 posts, 8 per page
//!     Showing: posts 9-16
//! Page 2 of 11
//!     ...
//! ```

use crate::window::{PageEntry, PaginationResult};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Render the page row on one line, the current page in brackets.
fn page_row(result: &PaginationResult) -> String {
    result
        .pages
        .iter()
        .map(|entry| match entry {
            PageEntry::Page(n) if *n == result.current_page => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn nav_state(target: Option<u32>) -> String {
    match target {
        Some(page) => format!("page {page}"),
        None => "disabled".to_string(),
    }
}

/// Format the computed page row and navigation state.
pub fn format_window(result: &PaginationResult) -> Vec<String> {
    vec![
        format!("Page {} of {}", result.current_page, result.last_page),
        format!("{}Pages: {}", indent(1), page_row(result)),
        format!("{}Previous: {}", indent(1), nav_state(result.previous_page())),
        format!("{}Next: {}", indent(1), nav_state(result.next_page())),
    ]
}

/// Format a listing summary followed by its page row.
pub fn format_listing(
    result: &PaginationResult,
    total_items: usize,
    page_size: u32,
) -> Vec<String> {
    let mut lines = vec![format!("{} posts, {} per page", total_items, page_size)];
    let start = (result.current_page as usize - 1) * page_size as usize;
    let end = (start + page_size as usize).min(total_items);
    if start < end {
        lines.push(format!("{}Showing: posts {}-{}", indent(1), start + 1, end));
    } else {
        lines.push(format!("{}Showing: no posts", indent(1)));
    }
    lines.extend(format_window(result));
    lines
}

pub fn print_window(result: &PaginationResult) {
    for line in format_window(result) {
        println!("{}", line);
    }
}

pub fn print_listing(result: &PaginationResult, total_items: usize, page_size: u32) {
    for line in format_listing(result, total_items, page_size) {
        println!("{}", line);
    }
}
