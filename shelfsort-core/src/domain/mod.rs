//! Domain types for the catalog.

pub mod collection;
pub mod ids;
pub mod item;

pub use collection::{average_conversion_ratio, filter_high_performers, total_revenue};
pub use ids::{DatasetFingerprint, ItemId};
pub use item::{
    Item, Price, HIGH_PERFORMER_MIN_RATIO, HIGH_PERFORMER_MIN_SALES, UNSET_TIMESTAMP,
};
