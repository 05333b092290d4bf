//! Batch result envelope.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfsort_core::{DatasetFingerprint, ResultError, SortResult, SortStrategy};

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Outcome of one batch (A/B) sort: one [`SortResult`] per distinct strategy,
/// all sorted from the same input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub results: BTreeMap<SortStrategy, SortResult>,
    /// Wall-clock time across every per-strategy sort.
    pub total_time: Duration,
    pub strategy_count: usize,
    pub item_count: usize,
    pub executed_at: DateTime<Utc>,
    /// Fingerprint of the input items, for matching runs to snapshots.
    pub dataset_fingerprint: DatasetFingerprint,
}

/// Default schema version for JSON written before the field existed.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl BatchResult {
    pub fn new(
        results: BTreeMap<SortStrategy, SortResult>,
        total_time: Duration,
        item_count: usize,
        dataset_fingerprint: DatasetFingerprint,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            strategy_count: results.len(),
            results,
            total_time,
            item_count,
            executed_at: Utc::now(),
            dataset_fingerprint,
        }
    }

    pub fn get(&self, strategy: SortStrategy) -> Option<&SortResult> {
        self.results.get(&strategy)
    }

    /// Strategies present, in `SortStrategy` order.
    pub fn strategies(&self) -> impl Iterator<Item = SortStrategy> + '_ {
        self.results.keys().copied()
    }

    pub fn validate(&self) -> Result<(), ResultError> {
        if self.results.is_empty() {
            return Err(ResultError::EmptyBatch);
        }
        if self.strategy_count != self.results.len() {
            return Err(ResultError::StrategyCountMismatch {
                expected: self.strategy_count,
                actual: self.results.len(),
            });
        }
        if self.executed_at == DateTime::<Utc>::default() {
            return Err(ResultError::MissingTimestamp);
        }
        for (&key, result) in &self.results {
            if result.strategy != key {
                return Err(ResultError::MisfiledEntry {
                    key,
                    actual: result.strategy,
                });
            }
            let entry_check = result.validate().and_then(|()| {
                if result.item_count == self.item_count {
                    Ok(())
                } else {
                    Err(ResultError::CountMismatch {
                        expected: self.item_count,
                        actual: result.item_count,
                    })
                }
            });
            entry_check.map_err(|source| ResultError::Entry {
                strategy: key,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfsort_core::fixtures::sample_catalog;
    use shelfsort_core::{dataset_fingerprint, SortEngine};

    fn batch(strategies: &[SortStrategy]) -> BatchResult {
        let items = sample_catalog();
        let engine = SortEngine::default();
        let results = strategies
            .iter()
            .map(|&s| (s, engine.execute(&items, s)))
            .collect();
        BatchResult::new(
            results,
            Duration::from_micros(10),
            items.len(),
            dataset_fingerprint(&items),
        )
    }

    #[test]
    fn new_batch_is_valid() {
        let b = batch(&[SortStrategy::PriceAsc, SortStrategy::Revenue]);
        assert_eq!(b.schema_version, SCHEMA_VERSION);
        assert_eq!(b.strategy_count, 2);
        assert!(b.validate().is_ok());
        assert_eq!(b.get(SortStrategy::PriceAsc).unwrap().ids(), vec![3, 1, 2]);
        assert!(b.get(SortStrategy::Name).is_none());
    }

    #[test]
    fn empty_batch_rejected() {
        let b = batch(&[]);
        assert_eq!(b.validate(), Err(ResultError::EmptyBatch));
    }

    #[test]
    fn strategy_count_mismatch_rejected() {
        let mut b = batch(&[SortStrategy::Name]);
        b.strategy_count = 2;
        assert_eq!(
            b.validate(),
            Err(ResultError::StrategyCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn misfiled_entry_rejected() {
        let mut b = batch(&[SortStrategy::Name]);
        let moved = b.results.remove(&SortStrategy::Name).unwrap();
        b.results.insert(SortStrategy::Revenue, moved);
        assert_eq!(
            b.validate(),
            Err(ResultError::MisfiledEntry {
                key: SortStrategy::Revenue,
                actual: SortStrategy::Name
            })
        );
    }

    #[test]
    fn broken_entry_reported_with_strategy() {
        let mut b = batch(&[SortStrategy::Popularity]);
        if let Some(r) = b.results.get_mut(&SortStrategy::Popularity) {
            r.items.pop();
        }
        match b.validate() {
            Err(ResultError::Entry { strategy, source }) => {
                assert_eq!(strategy, SortStrategy::Popularity);
                assert!(matches!(*source, ResultError::CountMismatch { .. }));
            }
            other => panic!("expected Entry error, got {other:?}"),
        }
    }

    #[test]
    fn entry_count_must_match_batch_count() {
        let mut b = batch(&[SortStrategy::Name]);
        b.item_count = 4;
        assert!(matches!(b.validate(), Err(ResultError::Entry { .. })));
    }

    #[test]
    fn strategies_iterate_in_enum_order() {
        let b = batch(&[SortStrategy::Name, SortStrategy::PriceAsc]);
        let s: Vec<_> = b.strategies().collect();
        assert_eq!(s, vec![SortStrategy::PriceAsc, SortStrategy::Name]);
    }
}
