//! Conversion-ratio ordering.

use std::cmp::Ordering;

use crate::domain::Item;

use super::{by_id, cmp_f64};

/// Best converters first, then more sales, then id.
///
/// Ratios compare exactly; two items tie only when their computed ratios are
/// numerically equal, never merely close. Zero-view items have ratio 0.0 and
/// rank with non-converting items.
pub fn conversion_ratio(a: &Item, b: &Item) -> Ordering {
    cmp_f64(b.conversion_ratio(), a.conversion_ratio())
        .then_with(|| b.sales_count.cmp(&a.sales_count))
        .then_with(|| by_id(a, b))
}
