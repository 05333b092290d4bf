//! Creation-date orderings.

use std::cmp::Ordering;

use crate::domain::Item;

use super::by_id;

/// Newest first, then id.
pub fn created_descending(a: &Item, b: &Item) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| by_id(a, b))
}

/// Oldest first, then id.
pub fn created_ascending(a: &Item, b: &Item) -> Ordering {
    a.created_at
        .cmp(&b.created_at)
        .then_with(|| by_id(a, b))
}
