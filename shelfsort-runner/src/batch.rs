//! Batch orchestrator — runs the sort engine once per distinct strategy over
//! one input snapshot.
//!
//! All gating happens before the first sort: absent collection, empty
//! strategy set, unknown strategy names, item invariants. A batch therefore
//! either returns a fully populated [`BatchResult`] or an error, never a
//! partial map.
//!
//! Cancellation is cooperative: an optional `AtomicBool` is checked before
//! any sort starts and again before each per-strategy sort.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shelfsort_core::{
    dataset_fingerprint, validate_items, CatalogError, Item, SortEngine, SortResult, SortStrategy,
    ValidationReport,
};

use crate::result::BatchResult;

/// Execution knobs for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOptions {
    /// Run per-strategy sorts on the rayon global pool.
    pub parallel: bool,
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|f| f.load(Ordering::Relaxed))
}

/// Resolve every name up front. Duplicates collapse to one strategy; the first
/// unknown name is reported.
pub fn resolve_strategies<S: AsRef<str>>(
    engine: &SortEngine,
    names: &[S],
) -> Result<Vec<SortStrategy>, CatalogError> {
    if names.is_empty() {
        return Err(CatalogError::EmptyStrategySet);
    }
    let mut distinct = BTreeSet::new();
    for name in names {
        distinct.insert(engine.registry().resolve(name.as_ref())?);
    }
    Ok(distinct.into_iter().collect())
}

/// Callback invoked once per finished per-strategy sort.
pub type ProgressFn<'a> = &'a (dyn Fn(&SortResult) + Sync);

/// Sort `items` under every named strategy.
///
/// Parameters:
/// - `options.parallel`: fan out across rayon workers. Output is identical to
///   sequential execution.
/// - `cancel`: optional flag; when observed the batch returns
///   [`CatalogError::Cancelled`] and discards finished entries.
pub fn batch_sort<S: AsRef<str>>(
    engine: &SortEngine,
    items: Option<&[Item]>,
    strategies: &[S],
    options: &BatchOptions,
    cancel: Option<&AtomicBool>,
) -> Result<BatchResult, CatalogError> {
    batch_sort_with_progress(engine, items, strategies, options, None, cancel)
}

/// [`batch_sort`] with a callback fired after each per-strategy sort.
///
/// The callback runs on the worker that finished the sort. Results handed to
/// it are discarded if the batch is later cancelled.
pub fn batch_sort_with_progress<S: AsRef<str>>(
    engine: &SortEngine,
    items: Option<&[Item]>,
    strategies: &[S],
    options: &BatchOptions,
    progress_cb: Option<ProgressFn<'_>>,
    cancel: Option<&AtomicBool>,
) -> Result<BatchResult, CatalogError> {
    let items = items.ok_or_else(ValidationReport::missing_collection)?;
    let strategies = resolve_strategies(engine, strategies)?;
    validate_items(Some(items))?;

    if is_cancelled(cancel) {
        warn!(strategy_count = strategies.len(), "batch cancelled before start");
        return Err(CatalogError::Cancelled);
    }

    debug!(
        strategy_count = strategies.len(),
        item_count = items.len(),
        parallel = options.parallel,
        "starting batch sort"
    );
    let start = Instant::now();

    let run_one = |strategy: SortStrategy| -> Option<SortResult> {
        if is_cancelled(cancel) {
            return None;
        }
        let result = engine.execute(items, strategy);
        if let Some(cb) = progress_cb {
            cb(&result);
        }
        Some(result)
    };

    let finished: Option<Vec<SortResult>> = if options.parallel {
        strategies.par_iter().map(|&s| run_one(s)).collect()
    } else {
        strategies.iter().map(|&s| run_one(s)).collect()
    };

    let Some(finished) = finished else {
        warn!(strategy_count = strategies.len(), "batch cancelled mid-run");
        return Err(CatalogError::Cancelled);
    };

    let total_time = start.elapsed();
    let item_count = finished.first().map_or(items.len(), |r| r.item_count);
    let results: BTreeMap<SortStrategy, SortResult> =
        finished.into_iter().map(|r| (r.strategy, r)).collect();

    let batch = BatchResult::new(results, total_time, item_count, dataset_fingerprint(items));
    debug!(
        strategy_count = batch.strategy_count,
        item_count = batch.item_count,
        elapsed_us = total_time.as_micros() as u64,
        fingerprint = batch.dataset_fingerprint.short(),
        "batch sort completed"
    );
    Ok(batch)
}
