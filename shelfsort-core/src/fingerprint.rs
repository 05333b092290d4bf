//! Dataset fingerprinting — deterministic identification of an input snapshot.
//!
//! Batch results carry the fingerprint of the items they were sorted from, so
//! two A/B runs can be checked for having seen the same catalog. Hashing is
//! order-sensitive: a permuted catalog is a different snapshot.

use crate::domain::{DatasetFingerprint, Item};

/// BLAKE3 over every field of every item, in input order.
///
/// Strings are length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
/// Prices hash by bit pattern.
pub fn dataset_fingerprint(items: &[Item]) -> DatasetFingerprint {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(items.len() as u64).to_le_bytes());
    for item in items {
        hasher.update(&item.id.0.to_le_bytes());
        hasher.update(&(item.name.len() as u64).to_le_bytes());
        hasher.update(item.name.as_bytes());
        hasher.update(&item.price.value().to_bits().to_le_bytes());
        hasher.update(&item.created_at.timestamp().to_le_bytes());
        hasher.update(&item.created_at.timestamp_subsec_nanos().to_le_bytes());
        hasher.update(&item.sales_count.to_le_bytes());
        hasher.update(&item.views_count.to_le_bytes());
    }
    DatasetFingerprint(hasher.finalize().to_hex().to_string())
}
