//! Aggregate helpers over item slices.

use super::item::Item;

/// Copies of the items that pass [`Item::is_high_performer`], in input order.
pub fn filter_high_performers(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.is_high_performer())
        .cloned()
        .collect()
}

/// Sum of per-item revenue.
pub fn total_revenue(items: &[Item]) -> f64 {
    items.iter().map(Item::revenue).sum()
}

/// Mean conversion ratio. 0.0 for an empty slice.
pub fn average_conversion_ratio(items: &[Item]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let total: f64 = items.iter().map(Item::conversion_ratio).sum();
    total / items.len() as f64
}
