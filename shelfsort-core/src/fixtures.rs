//! Built-in datasets: the three-item sample catalog and a seeded synthetic
//! generator for larger runs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Item, UNSET_TIMESTAMP};

const ADJECTIVES: [&str; 10] = [
    "Alabaster", "Walnut", "Zebra", "Coffee", "Rustic", "Nordic", "Velvet", "Marble", "Cedar",
    "Copper",
];

const NOUNS: [&str; 8] = [
    "Table", "Chair", "Lamp", "Shelf", "Desk", "Stool", "Cabinet", "Bench",
];

/// Midnight UTC on the given date. Out-of-range dates map to
/// [`UNSET_TIMESTAMP`], which validation rejects.
pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(UNSET_TIMESTAMP)
}

/// The three-item demo catalog.
///
/// | id | name | price | sales | views | created |
/// |---|---|---|---|---|---|
/// | 1 | Alabaster Table | 12.99 | 32 | 730 | 2019-01-04 |
/// | 2 | Zebra Table | 44.49 | 301 | 3279 | 2012-01-04 |
/// | 3 | Coffee Table | 10.00 | 1048 | 20123 | 2014-05-28 |
pub fn sample_catalog() -> Vec<Item> {
    vec![
        Item::new(1, "Alabaster Table", 12.99, utc_date(2019, 1, 4), 32, 730),
        Item::new(2, "Zebra Table", 44.49, utc_date(2012, 1, 4), 301, 3279),
        Item::new(3, "Coffee Table", 10.00, utc_date(2014, 5, 28), 1048, 20123),
    ]
}

/// Deterministic random catalog of `count` items with ids `1..=count`.
///
/// Every generated item passes validation: prices are whole cents in
/// `[0.50, 2000.00)`, sales never exceed views, and creation dates fall
/// between 2010-01-01 and 2023-12-31. Some items have zero views.
pub fn synthetic_catalog(count: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = utc_date(2010, 1, 1);

    (1..=count as u64)
        .map(|id| {
            let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
            let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
            let cents: u64 = rng.gen_range(50..200_000);
            let views: u64 = if rng.gen_bool(0.05) {
                0
            } else {
                rng.gen_range(1..50_000)
            };
            let sales = if views == 0 {
                0
            } else {
                rng.gen_range(0..=views / 4)
            };
            let created_at = base
                + Duration::days(rng.gen_range(0..5_112))
                + Duration::seconds(rng.gen_range(0..86_400));

            Item::new(
                id,
                format!("{adjective} {noun} {id}"),
                cents as f64 / 100.0,
                created_at,
                sales,
                views,
            )
        })
        .collect()
}
