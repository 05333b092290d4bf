//! Price orderings.

use std::cmp::Ordering;

use crate::domain::Item;

use super::{by_id, cmp_f64};

/// Cheapest first; equal prices fall back to id.
pub fn price_ascending(a: &Item, b: &Item) -> Ordering {
    cmp_f64(a.price.value(), b.price.value()).then_with(|| by_id(a, b))
}

/// Most expensive first; equal prices fall back to id.
pub fn price_descending(a: &Item, b: &Item) -> Ordering {
    cmp_f64(b.price.value(), a.price.value()).then_with(|| by_id(a, b))
}
