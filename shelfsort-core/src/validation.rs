//! Item validation gate.
//!
//! Every sort entry point runs this before ordering anything. All violations
//! across the whole collection are collected so callers can report them at
//! once. An absent collection is an error; an empty one is valid.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemId, Price, UNSET_TIMESTAMP};
use crate::error::CatalogError;

/// Maximum name length, in characters.
pub const MAX_NAME_CHARS: usize = 255;

/// Which item field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemField {
    Id,
    Name,
    Price,
    CreatedAt,
    SalesCount,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
            Self::SalesCount => "sales_count",
        };
        f.write_str(s)
    }
}

/// A single broken invariant on a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemViolation {
    /// Position of the item in the input slice.
    pub index: usize,
    pub item_id: ItemId,
    pub field: ItemField,
    /// Offending value, rendered for display.
    pub value: String,
    pub message: String,
}

impl fmt::Display for ItemViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item at index {} (id {}): field '{}' with value '{}': {}",
            self.index, self.item_id, self.field, self.value, self.message
        )
    }
}

/// Everything wrong with a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no collection was supplied at all.
    pub collection_missing: bool,
    pub violations: Vec<ItemViolation>,
}

impl ValidationReport {
    pub fn missing_collection() -> Self {
        Self {
            collection_missing: true,
            violations: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.collection_missing && self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations attributed to one item position.
    pub fn for_index(&self, index: usize) -> impl Iterator<Item = &ItemViolation> {
        self.violations.iter().filter(move |v| v.index == index)
    }

    fn into_result(self) -> Result<(), CatalogError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(CatalogError::ValidationFailed(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.collection_missing {
            return f.write_str("item collection is absent");
        }
        write!(f, "{} item violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}

/// Check one item against the invariants, as of `now`.
pub fn validate_item(item: &Item, index: usize, now: DateTime<Utc>) -> Vec<ItemViolation> {
    let mut out = Vec::new();
    let mut push = |field: ItemField, value: String, message: &str| {
        out.push(ItemViolation {
            index,
            item_id: item.id,
            field,
            value,
            message: message.to_string(),
        });
    };

    if !item.id.is_valid() {
        push(ItemField::Id, item.id.to_string(), "must be positive");
    }

    if item.name.is_empty() {
        push(ItemField::Name, String::new(), "cannot be empty");
    }
    let name_chars = item.name.chars().count();
    if name_chars > MAX_NAME_CHARS {
        push(
            ItemField::Name,
            name_chars.to_string(),
            "cannot exceed 255 characters",
        );
    }

    let price = item.price.value();
    if !price.is_finite() {
        push(ItemField::Price, price.to_string(), "must be a finite number");
    } else if price < 0.0 {
        push(ItemField::Price, price.to_string(), "cannot be negative");
    } else if price > Price::MAX {
        push(
            ItemField::Price,
            price.to_string(),
            "exceeds maximum allowed value (999999.99)",
        );
    }

    if item.created_at == UNSET_TIMESTAMP {
        push(ItemField::CreatedAt, item.created_at.to_rfc3339(), "must be set");
    } else if item.created_at > now {
        push(
            ItemField::CreatedAt,
            item.created_at.to_rfc3339(),
            "cannot be in the future",
        );
    }

    if item.sales_count > item.views_count {
        push(
            ItemField::SalesCount,
            format!("sales: {}, views: {}", item.sales_count, item.views_count),
            "sales count cannot exceed views count",
        );
    }

    out
}

/// Collect violations for a whole collection, including duplicate ids.
pub fn collect_violations(items: &[Item], now: DateTime<Utc>) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        report.violations.extend(validate_item(item, index, now));
        if item.id.is_valid() && !seen.insert(item.id) {
            report.violations.push(ItemViolation {
                index,
                item_id: item.id,
                field: ItemField::Id,
                value: item.id.to_string(),
                message: "duplicate id within collection".to_string(),
            });
        }
    }

    report
}

/// Validation gate as of `now`.
pub fn validate_items_at(items: Option<&[Item]>, now: DateTime<Utc>) -> Result<(), CatalogError> {
    match items {
        None => ValidationReport::missing_collection().into_result(),
        Some(items) => collect_violations(items, now).into_result(),
    }
}

/// Validation gate against the current wall clock.
pub fn validate_items(items: Option<&[Item]>) -> Result<(), CatalogError> {
    validate_items_at(items, Utc::now())
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_catalog;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn good() -> Item {
        Item::new(
            1,
            "Oak Shelf",
            25.0,
            Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap(),
            5,
            50,
        )
    }

    fn expect_report(result: Result<(), CatalogError>) -> ValidationReport {
        match result {
            Err(CatalogError::ValidationFailed(report)) => report,
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn valid_item_has_no_violations() {
        assert!(validate_item(&good(), 0, now()).is_empty());
    }

    #[test]
    fn sample_catalog_is_valid() {
        assert!(validate_items(Some(&sample_catalog())).is_ok());
    }

    #[test]
    fn empty_collection_is_valid() {
        assert!(validate_items_at(Some(&[]), now()).is_ok());
    }

    #[test]
    fn absent_collection_is_rejected() {
        let report = expect_report(validate_items_at(None, now()));
        assert!(report.collection_missing);
        assert!(report.violations.is_empty());
        assert_eq!(report.to_string(), "item collection is absent");
    }

    #[test]
    fn zero_id_rejected() {
        let item = Item { id: ItemId(0), ..good() };
        let v = validate_item(&item, 0, now());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].field, ItemField::Id);
    }

    #[test]
    fn empty_and_long_names_rejected() {
        let empty = Item { name: String::new(), ..good() };
        assert_eq!(validate_item(&empty, 0, now())[0].field, ItemField::Name);

        let long = Item { name: "x".repeat(256), ..good() };
        let v = validate_item(&long, 0, now());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].value, "256");

        let max = Item { name: "x".repeat(255), ..good() };
        assert!(validate_item(&max, 0, now()).is_empty());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let item = Item { name: "é".repeat(200), ..good() };
        assert!(validate_item(&item, 0, now()).is_empty());
    }

    #[test]
    fn price_violations() {
        for bad in [-1.0, 1_000_000.0, f64::NAN, f64::NEG_INFINITY] {
            let item = Item { price: Price(bad), ..good() };
            let v = validate_item(&item, 0, now());
            assert_eq!(v.len(), 1, "price {bad} should yield one violation");
            assert_eq!(v[0].field, ItemField::Price);
        }
    }

    #[test]
    fn unset_and_future_timestamps_rejected() {
        let unset = Item { created_at: UNSET_TIMESTAMP, ..good() };
        let v = validate_item(&unset, 0, now());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].message, "must be set");

        let future = Item { created_at: now() + Duration::days(1), ..good() };
        let v = validate_item(&future, 0, now());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].message, "cannot be in the future");
    }

    #[test]
    fn unix_epoch_is_a_real_date() {
        let epoch = Item { created_at: DateTime::<Utc>::default(), ..good() };
        assert!(validate_item(&epoch, 0, now()).is_empty());
        assert!(validate_item(&Item::default(), 0, now())
            .iter()
            .any(|v| v.field == ItemField::CreatedAt && v.message == "must be set"));
    }

    #[test]
    fn sales_exceeding_views_rejected() {
        let item = Item { sales_count: 11, views_count: 10, ..good() };
        let v = validate_item(&item, 0, now());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].field, ItemField::SalesCount);
        assert_eq!(v[0].value, "sales: 11, views: 10");
    }

    #[test]
    fn all_violations_reported_together() {
        let bad = Item {
            id: ItemId(0),
            name: String::new(),
            price: Price(-5.0),
            created_at: UNSET_TIMESTAMP,
            sales_count: 3,
            views_count: 1,
        };
        let items = vec![good(), bad];
        let report = expect_report(validate_items_at(Some(&items), now()));
        assert_eq!(report.len(), 5);
        assert!(report.for_index(0).next().is_none());
        assert_eq!(report.for_index(1).count(), 5);
        assert!(report.to_string().starts_with("5 item violation(s)"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let items = vec![good(), Item { name: "Other".into(), ..good() }];
        let report = expect_report(validate_items_at(Some(&items), now()));
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations[0].index, 1);
        assert_eq!(report.violations[0].message, "duplicate id within collection");
    }
}
