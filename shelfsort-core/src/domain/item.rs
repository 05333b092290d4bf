//! Item — one catalog record plus its derived business metrics.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;

/// Conversion ratio above which an item counts as a high performer.
pub const HIGH_PERFORMER_MIN_RATIO: f64 = 0.05;

/// Sales count above which an item counts as a high performer.
pub const HIGH_PERFORMER_MIN_SALES: u64 = 50;

/// Creation timestamp of an item whose date was never set. The Unix epoch is a
/// real date, so the earliest representable instant stands in instead.
pub const UNSET_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Item price in currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub f64);

impl Price {
    /// Largest accepted price.
    pub const MAX: f64 = 999_999.99;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite, non-negative, and at most [`Price::MAX`].
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0 && self.0 <= Self::MAX
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// A catalog item. Immutable value object: sorting always works on copies.
///
/// `Default` yields an item with every field unset (id 0, empty name,
/// [`UNSET_TIMESTAMP`]), which fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub sales_count: u64,
    pub views_count: u64,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            name: String::new(),
            price: Price::default(),
            created_at: UNSET_TIMESTAMP,
            sales_count: 0,
            views_count: 0,
        }
    }
}

impl Item {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        created_at: DateTime<Utc>,
        sales_count: u64,
        views_count: u64,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            price: Price(price),
            created_at,
            sales_count,
            views_count,
        }
    }

    /// Sales divided by views. Zero-view items convert at exactly 0.0.
    pub fn conversion_ratio(&self) -> f64 {
        if self.views_count == 0 {
            return 0.0;
        }
        self.sales_count as f64 / self.views_count as f64
    }

    /// Price × sales.
    pub fn revenue(&self) -> f64 {
        self.price.0 * self.sales_count as f64
    }

    /// Time elapsed between creation and `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.created_at
    }

    /// Whole days on the market as of `now`.
    pub fn days_on_market_at(&self, now: DateTime<Utc>) -> i64 {
        self.age_at(now).num_days()
    }

    /// Conversion ratio above 5% AND more than 50 sales.
    pub fn is_high_performer(&self) -> bool {
        self.conversion_ratio() > HIGH_PERFORMER_MIN_RATIO
            && self.sales_count > HIGH_PERFORMER_MIN_SALES
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item{{id: {}, name: {:?}, price: {}, sales: {}, views: {}, ratio: {:.4}, created: {}}}",
            self.id,
            self.name,
            self.price,
            self.sales_count,
            self.views_count,
            self.conversion_ratio(),
            self.created_at.format("%Y-%m-%d"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn item(sales: u64, views: u64, price: f64) -> Item {
        Item::new(1, "Test", price, day(2020, 1, 1), sales, views)
    }

    #[test]
    fn conversion_ratio_basic() {
        let it = item(32, 730, 12.99);
        assert!((it.conversion_ratio() - 32.0 / 730.0).abs() < 1e-15);
    }

    #[test]
    fn conversion_ratio_zero_views_is_zero() {
        let it = item(0, 0, 1.0);
        assert_eq!(it.conversion_ratio(), 0.0);
        assert!(!it.conversion_ratio().is_nan());
    }

    #[test]
    fn revenue_is_price_times_sales() {
        let it = item(1048, 20123, 10.0);
        assert_eq!(it.revenue(), 10480.0);
    }

    #[test]
    fn revenue_zero_sales() {
        assert_eq!(item(0, 100, 99.0).revenue(), 0.0);
    }

    #[test]
    fn days_on_market_counts_whole_days() {
        let it = item(1, 1, 1.0);
        assert_eq!(it.days_on_market_at(day(2020, 1, 11)), 10);
        assert_eq!(it.age_at(day(2020, 1, 2)), Duration::days(1));
    }

    #[test]
    fn high_performer_requires_both_thresholds() {
        // 301 / 3279 ≈ 9.2% with 301 sales
        assert!(item(301, 3279, 44.49).is_high_performer());
        // ratio too low
        assert!(!item(32, 730, 12.99).is_high_performer());
        // ratio high, but too few sales
        assert!(!item(10, 20, 5.0).is_high_performer());
        // exactly 50 sales is not enough
        assert!(!item(50, 100, 5.0).is_high_performer());
    }

    #[test]
    fn price_bounds() {
        assert!(Price(0.0).is_valid());
        assert!(Price(Price::MAX).is_valid());
        assert!(!Price(-0.01).is_valid());
        assert!(!Price(1_000_000.0).is_valid());
        assert!(!Price(f64::NAN).is_valid());
        assert!(!Price(f64::INFINITY).is_valid());
    }

    #[test]
    fn price_display_has_two_decimals() {
        assert_eq!(Price(12.99).to_string(), "$12.99");
        assert_eq!(Price(10.0).to_string(), "$10.00");
    }

    #[test]
    fn item_serde_field_names() {
        let it = item(5, 10, 2.5);
        let json = serde_json::to_value(&it).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 2.5);
        assert_eq!(json["sales_count"], 5);
        assert_eq!(json["views_count"], 10);
        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, it);
    }
}
