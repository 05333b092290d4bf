//! Popularity ordering.

use std::cmp::Ordering;

use crate::domain::Item;

use super::by_id;

/// Most viewed first, then more sales, then id.
pub fn popularity(a: &Item, b: &Item) -> Ordering {
    b.views_count
        .cmp(&a.views_count)
        .then_with(|| b.sales_count.cmp(&a.sales_count))
        .then_with(|| by_id(a, b))
}
