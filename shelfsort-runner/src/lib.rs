//! Shelfsort Runner — batch (A/B) orchestration, experiments, and export.
//!
//! This crate builds on `shelfsort-core` to provide:
//! - The batch orchestrator with optional parallelism and cooperative cancellation
//! - `BatchResult` envelopes with schema versioning and dataset fingerprints
//! - The `CatalogService` facade used by callers and the CLI
//! - TOML experiment configs and JSON item loading
//! - JSON, CSV, and Markdown export

pub mod batch;
pub mod config;
pub mod export;
pub mod result;
pub mod service;

pub use batch::{
    batch_sort, batch_sort_with_progress, resolve_strategies, BatchOptions, ProgressFn,
};
pub use config::{read_items_json, ConfigError, DatasetSource, ExperimentConfig};
pub use export::{
    export_batch_json, export_ranking_csv, export_sort_json, import_batch_json,
    load_batch_artifacts, render_batch_markdown, save_batch_artifacts,
};
pub use result::{BatchResult, SCHEMA_VERSION};
pub use service::{CatalogService, ExperimentError};
