//! Revenue ordering.

use std::cmp::Ordering;

use crate::domain::Item;

use super::{by_id, cmp_f64};

/// Highest price × sales first, then more sales, then id.
pub fn revenue(a: &Item, b: &Item) -> Ordering {
    cmp_f64(b.revenue(), a.revenue())
        .then_with(|| b.sales_count.cmp(&a.sales_count))
        .then_with(|| by_id(a, b))
}
