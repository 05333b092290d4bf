//! Property tests for ordering invariants.
//!
//! Uses proptest to verify:
//! 1. Idempotence — re-sorting a sorted sequence changes nothing
//! 2. Tie permutation invariance — output is independent of input order
//! 3. Non-mutation — the caller's sequence is untouched
//! 4. Count preservation — output length equals input length
//! 5. Zero-view safety — conversion ratio is exactly 0.0, never NaN
//! 6. Signed zero — a `-0.0` price ranks exactly like `0.0`

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use shelfsort_core::ordering::sorted_copy;
use shelfsort_core::{Item, Price, SortEngine, SortStrategy};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_strategy() -> impl Strategy<Value = SortStrategy> {
    prop::sample::select(SortStrategy::ALL.to_vec())
}

/// Narrow key ranges so primary and secondary keys collide often. The bool
/// flips the sign of zero prices.
fn arb_fields() -> impl Strategy<Value = (u8, bool, u64, u64, i64, u8)> {
    (0u8..4, any::<bool>(), 0u64..6, 0u64..6, 0i64..4, 0u8..3)
}

fn price_of(step: u8, negative_zero: bool) -> f64 {
    if step == 0 && negative_zero {
        -0.0
    } else {
        f64::from(step) * 2.5
    }
}

/// Valid catalog with unique ids 1..=n and plenty of ties.
fn arb_catalog() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_fields(), 0..40).prop_map(|rows| {
        let base = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
        let names = ["desk", "Desk", "chair"];
        rows.into_iter()
            .enumerate()
            .map(|(i, (price, negative_zero, sales, views, day, name))| {
                Item::new(
                    i as u64 + 1,
                    names[name as usize],
                    price_of(price, negative_zero),
                    base + Duration::days(day),
                    sales.min(views),
                    views,
                )
            })
            .collect()
    })
}

fn arb_catalog_and_permutation() -> impl Strategy<Value = (Vec<Item>, Vec<Item>)> {
    arb_catalog().prop_flat_map(|items| {
        let shuffled = Just(items.clone()).prop_shuffle();
        (Just(items), shuffled)
    })
}

proptest! {
    #[test]
    fn sorting_is_idempotent(items in arb_catalog(), strategy in arb_strategy()) {
        let once = sorted_copy(&items, strategy);
        let twice = sorted_copy(&once, strategy);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_independent_of_input_order(
        (items, shuffled) in arb_catalog_and_permutation(),
        strategy in arb_strategy(),
    ) {
        prop_assert_eq!(sorted_copy(&items, strategy), sorted_copy(&shuffled, strategy));
    }

    #[test]
    fn caller_sequence_not_mutated(items in arb_catalog(), strategy in arb_strategy()) {
        let snapshot = items.clone();
        let engine = SortEngine::default();
        let result = engine.sort(Some(&items), strategy.name());
        prop_assert!(result.is_ok());
        prop_assert_eq!(items, snapshot);
    }

    #[test]
    fn count_preserved(items in arb_catalog(), strategy in arb_strategy()) {
        let engine = SortEngine::default();
        let result = engine.sort(Some(&items), strategy.name()).unwrap();
        prop_assert_eq!(result.items.len(), items.len());
        prop_assert_eq!(result.item_count, items.len());
    }

    #[test]
    fn output_is_a_permutation_of_input(items in arb_catalog(), strategy in arb_strategy()) {
        let mut in_ids: Vec<u64> = items.iter().map(|i| i.id.0).collect();
        let mut out_ids: Vec<u64> = sorted_copy(&items, strategy).iter().map(|i| i.id.0).collect();
        in_ids.sort_unstable();
        out_ids.sort_unstable();
        prop_assert_eq!(in_ids, out_ids);
    }

    #[test]
    fn zero_views_ratio_is_exactly_zero(id in 1u64..10_000, price in 0.0..1000.0_f64) {
        let item = Item::new(
            id,
            "Unseen",
            price,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            0,
            0,
        );
        prop_assert_eq!(item.conversion_ratio(), 0.0);
        prop_assert!(!item.conversion_ratio().is_nan());
    }

    #[test]
    fn signed_zero_prices_rank_like_zero(items in arb_catalog(), strategy in arb_strategy()) {
        let unsigned: Vec<Item> = items
            .iter()
            .map(|i| Item { price: Price(i.price.value() + 0.0), ..i.clone() })
            .collect();
        let ids = |v: Vec<Item>| v.iter().map(|i| i.id.0).collect::<Vec<u64>>();
        prop_assert_eq!(
            ids(sorted_copy(&items, strategy)),
            ids(sorted_copy(&unsigned, strategy))
        );
    }
}
