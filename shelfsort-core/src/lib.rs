//! Shelfsort Core — catalog items, strategy registry, comparators, sort engine.
//!
//! This crate contains the ordering logic:
//! - Domain types (items, ids, prices) and derived business metrics
//! - The fixed registry of eight named sort strategies
//! - One total-order comparator per strategy, each ending at the item id
//! - The validation gate every sort entry point runs first
//! - The sort engine that produces [`SortResult`] envelopes
//! - Dataset fingerprints, performance analysis, and built-in fixtures

pub mod analysis;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod fixtures;
pub mod ordering;
pub mod result;
pub mod strategy;
pub mod validation;

pub use analysis::PerformanceAnalysis;
pub use domain::{DatasetFingerprint, Item, ItemId, Price};
pub use engine::SortEngine;
pub use error::CatalogError;
pub use fingerprint::dataset_fingerprint;
pub use result::{ResultError, SortResult};
pub use strategy::{SortStrategy, StrategyInfo, StrategyRegistry};
pub use validation::{validate_items, ItemField, ItemViolation, ValidationReport};
