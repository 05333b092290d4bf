//! Alphabetical ordering.

use std::cmp::Ordering;

use crate::domain::Item;

use super::by_id;

/// Case-folded name ascending, then id.
///
/// Folding happens character by character, so no lowered copies are allocated.
pub fn name(a: &Item, b: &Item) -> Ordering {
    folded(&a.name)
        .cmp(folded(&b.name))
        .then_with(|| by_id(a, b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}
