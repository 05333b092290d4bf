//! Catalog service — the caller-facing facade over the sort engine and the
//! batch orchestrator.
//!
//! Four core operations plus two conveniences:
//! - `sort_products()`: single strategy, full gate.
//! - `batch_sort()` / `batch_sort_with_cancel()`: A/B over many strategies.
//! - `list_supported_strategies()`: registry dump.
//! - `validate_items()`: the item gate on its own.
//! - `analyze_performance()`: high/low performer split behind the same gate.
//! - `run_experiment()`: load a config's dataset and batch it.

use std::sync::atomic::AtomicBool;

use thiserror::Error;
use tracing::{debug, info};

use shelfsort_core::{
    validate_items, CatalogError, Item, PerformanceAnalysis, SortEngine, SortResult, SortStrategy,
    StrategyRegistry, ValidationReport,
};

use crate::batch::{batch_sort, BatchOptions};
use crate::config::{ConfigError, ExperimentConfig};
use crate::result::BatchResult;

/// Errors from running a configured experiment.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("sort error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Stateless facade; cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    engine: SortEngine,
}

impl CatalogService {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            engine: SortEngine::new(registry),
        }
    }

    pub fn engine(&self) -> &SortEngine {
        &self.engine
    }

    pub fn sort_products(
        &self,
        items: Option<&[Item]>,
        strategy: &str,
    ) -> Result<SortResult, CatalogError> {
        self.engine.sort(items, strategy)
    }

    /// Sequential batch without cancellation.
    pub fn batch_sort<S: AsRef<str>>(
        &self,
        items: Option<&[Item]>,
        strategies: &[S],
    ) -> Result<BatchResult, CatalogError> {
        batch_sort(&self.engine, items, strategies, &BatchOptions::default(), None)
    }

    pub fn batch_sort_with_cancel<S: AsRef<str>>(
        &self,
        items: Option<&[Item]>,
        strategies: &[S],
        options: &BatchOptions,
        cancel: Option<&AtomicBool>,
    ) -> Result<BatchResult, CatalogError> {
        batch_sort(&self.engine, items, strategies, options, cancel)
    }

    pub fn list_supported_strategies(&self) -> Vec<SortStrategy> {
        self.engine.registry().strategies()
    }

    pub fn validate_items(&self, items: Option<&[Item]>) -> Result<(), CatalogError> {
        validate_items(items)
    }

    pub fn analyze_performance(
        &self,
        items: Option<&[Item]>,
    ) -> Result<PerformanceAnalysis, CatalogError> {
        let items = items.ok_or_else(ValidationReport::missing_collection)?;
        validate_items(Some(items))?;
        let analysis = PerformanceAnalysis::compute(items);
        debug!(
            total_items = analysis.total_items,
            high_performers = analysis.high_performers.len(),
            "performance analysis computed"
        );
        Ok(analysis)
    }

    /// Load the experiment's dataset and run its strategy set.
    pub fn run_experiment(
        &self,
        config: &ExperimentConfig,
        cancel: Option<&AtomicBool>,
    ) -> Result<BatchResult, ExperimentError> {
        let items = config.load_items()?;
        info!(
            experiment = %config.experiment.name,
            item_count = items.len(),
            strategy_count = config.experiment.strategies.len(),
            "running experiment"
        );
        let batch = batch_sort(
            &self.engine,
            Some(&items),
            config.experiment.strategies.as_slice(),
            &config.batch_options(),
            cancel,
        )?;
        Ok(batch)
    }
}
