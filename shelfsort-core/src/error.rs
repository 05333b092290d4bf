//! Error taxonomy for sorting operations.

use thiserror::Error;

use crate::validation::ValidationReport;

/// Errors returned by single and batch sorts.
///
/// Sorting is pure and deterministic, so none of these are transient.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationReport),
    #[error("invalid sort strategy: {0}")]
    InvalidStrategy(String),
    #[error("strategy set cannot be empty")]
    EmptyStrategySet,
    #[error("batch sort cancelled")]
    Cancelled,
}

impl From<ValidationReport> for CatalogError {
    fn from(report: ValidationReport) -> Self {
        Self::ValidationFailed(report)
    }
}
