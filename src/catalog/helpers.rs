//! Item Catalog Helpers
//!
//! This module contains formatting helpers for catalog items.

use super::models::Item;

/// Produces a human-readable one-line summary for a list of items.
///
/// Example output: `"#1 Air Jordan, #2 Air Lebron"`.
pub fn format_item_summary(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| format!("#{} {}", i.code, i.title))
        .collect::<Vec<_>>()
        .join(", ")
}
