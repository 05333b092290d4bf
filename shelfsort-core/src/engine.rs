//! Sort engine — resolves a strategy, gates the input, and produces a
//! [`SortResult`] from a stable sort over a defensive copy.
//!
//! Two entry points:
//! - [`SortEngine::sort`]: full gate (absent collection, strategy name, item
//!   invariants), then sort. Used by single-sort callers.
//! - [`SortEngine::execute`]: sort only, for callers that already ran the gate
//!   once for many strategies (batch orchestration).

use std::time::Instant;

use tracing::debug;

use crate::domain::Item;
use crate::error::CatalogError;
use crate::ordering::sorted_copy;
use crate::result::SortResult;
use crate::strategy::{SortStrategy, StrategyRegistry};
use crate::validation::{validate_items, ValidationReport};

/// Stateless sorter over an injected strategy registry.
#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    registry: StrategyRegistry,
}

impl SortEngine {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Sort `items` by the strategy named `strategy`.
    ///
    /// Checks run in order: absent collection, unknown strategy, item
    /// invariants. The caller's slice is never reordered.
    pub fn sort(&self, items: Option<&[Item]>, strategy: &str) -> Result<SortResult, CatalogError> {
        let items = items.ok_or_else(ValidationReport::missing_collection)?;
        let strategy = self.registry.resolve(strategy)?;
        validate_items(Some(items))?;
        Ok(self.execute(items, strategy))
    }

    /// Sort already-validated items. Empty input short-circuits without
    /// invoking a comparator.
    pub fn execute(&self, items: &[Item], strategy: SortStrategy) -> SortResult {
        let start = Instant::now();
        debug!(strategy = %strategy, item_count = items.len(), "starting sort");

        let sorted = if items.is_empty() {
            Vec::new()
        } else {
            sorted_copy(items, strategy)
        };

        let elapsed = start.elapsed();
        let result = SortResult::new(sorted, strategy, elapsed);
        debug!(
            strategy = %strategy,
            item_count = result.item_count,
            elapsed_us = elapsed.as_micros() as u64,
            "sort completed"
        );
        result
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
