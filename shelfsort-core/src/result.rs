//! Sort result envelope.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Item;
use crate::strategy::SortStrategy;

/// Broken invariants on a result envelope.
#[derive(Debug, Error, PartialEq)]
pub enum ResultError {
    #[error("item count mismatch: expected {expected}, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("completion timestamp must be set")]
    MissingTimestamp,
    #[error("batch result must contain at least one result")]
    EmptyBatch,
    #[error("strategy count mismatch: expected {expected}, got {actual}")]
    StrategyCountMismatch { expected: usize, actual: usize },
    #[error("entry keyed {key} holds a result for {actual}")]
    MisfiledEntry {
        key: SortStrategy,
        actual: SortStrategy,
    },
    #[error("invalid result for strategy {strategy}: {source}")]
    Entry {
        strategy: SortStrategy,
        #[source]
        source: Box<ResultError>,
    },
}

/// Output of one sort: the ordered copy plus timing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortResult {
    pub items: Vec<Item>,
    pub strategy: SortStrategy,
    pub execution_time: Duration,
    pub item_count: usize,
    pub sorted_at: DateTime<Utc>,
}

impl SortResult {
    /// Wrap a sorted sequence, stamping the completion time now.
    pub fn new(items: Vec<Item>, strategy: SortStrategy, execution_time: Duration) -> Self {
        let item_count = items.len();
        Self {
            items,
            strategy,
            execution_time,
            item_count,
            sorted_at: Utc::now(),
        }
    }

    /// Copy of the first `n` items (all of them if fewer).
    pub fn top(&self, n: usize) -> Vec<Item> {
        self.items.iter().take(n).cloned().collect()
    }

    /// Ids in result order.
    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(|i| i.id.0).collect()
    }

    pub fn validate(&self) -> Result<(), ResultError> {
        if self.item_count != self.items.len() {
            return Err(ResultError::CountMismatch {
                expected: self.item_count,
                actual: self.items.len(),
            });
        }
        if self.sorted_at == DateTime::<Utc>::default() {
            return Err(ResultError::MissingTimestamp);
        }
        Ok(())
    }
}

impl fmt::Display for SortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SortResult{{strategy: {}, items: {}, execution_time: {:?}, sorted_at: {}}}",
            self.strategy,
            self.item_count,
            self.execution_time,
            self.sorted_at.to_rfc3339()
        )
    }
}
