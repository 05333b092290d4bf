//! Comparator library — one total order per strategy.
//!
//! Every comparator ends its chain at the unique item id, so the sorted
//! output does not depend on the input permutation when keys tie. Dispatch is
//! a closed `match` over [`SortStrategy`]; adding a strategy without a
//! comparator does not compile.

pub mod conversion;
pub mod created;
pub mod name;
pub mod popularity;
pub mod price;
pub mod revenue;

use std::cmp::Ordering;

use crate::domain::Item;
use crate::strategy::SortStrategy;

/// Item comparator signature.
pub type Comparator = fn(&Item, &Item) -> Ordering;

/// Ascending float order where numerically equal values tie.
///
/// `0.0` and `-0.0` compare `Equal` so the chain falls through to the next
/// key. Non-equal values (including NaN) use the IEEE total order.
#[inline]
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Final tie-break: ascending id.
#[inline]
pub(crate) fn by_id(a: &Item, b: &Item) -> Ordering {
    a.id.cmp(&b.id)
}

/// The comparator for a strategy.
pub fn comparator_for(strategy: SortStrategy) -> Comparator {
    match strategy {
        SortStrategy::PriceAsc => price::price_ascending,
        SortStrategy::PriceDesc => price::price_descending,
        SortStrategy::SalesConversionRatio => conversion::conversion_ratio,
        SortStrategy::CreatedAtDesc => created::created_descending,
        SortStrategy::CreatedAtAsc => created::created_ascending,
        SortStrategy::Popularity => popularity::popularity,
        SortStrategy::Revenue => revenue::revenue,
        SortStrategy::Name => name::name,
    }
}

/// Stable sort of a fresh copy. The input slice is never reordered.
pub fn sorted_copy(items: &[Item], strategy: SortStrategy) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(comparator_for(strategy));
    sorted
}

// ─── Tests ───────────────────────────────────────────────────────────
