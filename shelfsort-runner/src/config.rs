//! Experiment configuration — which strategies to compare, over which items.
//!
//! ```toml
//! [experiment]
//! name = "homepage-ranking"
//! strategies = ["price_asc", "sales_conversion_ratio", "popularity"]
//! parallel = true
//! top_n = 3
//!
//! [dataset]
//! source = "synthetic"
//! count = 500
//! seed = 7
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shelfsort_core::fixtures::{sample_catalog, synthetic_catalog};
use shelfsort_core::{Item, StrategyRegistry};

use crate::batch::BatchOptions;

/// Errors from loading or checking an experiment config or an items file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A/B experiment: a named strategy set plus a dataset to run it over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentConfig {
    pub experiment: ExperimentSection,
    pub dataset: DatasetSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentSection {
    pub name: String,
    /// Strategy names as written; resolved against the registry on validate.
    pub strategies: Vec<String>,
    #[serde(default)]
    pub parallel: bool,
    /// Items shown per strategy in reports.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

/// Where the experiment's items come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSource {
    /// The three-item demo catalog.
    Sample,
    /// Seeded random catalog.
    Synthetic,
    /// JSON array of items at `path`.
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSection {
    pub source: DatasetSource,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_top_n() -> usize {
    3
}

fn default_count() -> usize {
    100
}

fn default_seed() -> u64 {
    42
}

impl ExperimentConfig {
    /// Read, parse, and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("experiment TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("serialize experiment: {e}")))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let exp = &self.experiment;
        if exp.strategies.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "experiment '{}' lists no strategies",
                exp.name
            )));
        }
        let registry = StrategyRegistry::new();
        if let Some(unknown) = exp.strategies.iter().find(|s| !registry.is_valid(s)) {
            return Err(ConfigError::Invalid(format!("unknown strategy '{unknown}'")));
        }
        if exp.top_n == 0 {
            return Err(ConfigError::Invalid("top_n must be at least 1".into()));
        }
        match self.dataset.source {
            DatasetSource::File if self.dataset.path.is_none() => Err(ConfigError::Invalid(
                "dataset source 'file' requires a path".into(),
            )),
            DatasetSource::Synthetic if self.dataset.count == 0 => Err(ConfigError::Invalid(
                "synthetic dataset count must be at least 1".into(),
            )),
            _ => Ok(()),
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            parallel: self.experiment.parallel,
        }
    }

    /// Materialize the dataset. Items are not validated here; the sort gate
    /// does that.
    pub fn load_items(&self) -> Result<Vec<Item>, ConfigError> {
        match self.dataset.source {
            DatasetSource::Sample => Ok(sample_catalog()),
            DatasetSource::Synthetic => {
                Ok(synthetic_catalog(self.dataset.count, self.dataset.seed))
            }
            DatasetSource::File => match &self.dataset.path {
                Some(path) => read_items_json(path),
                None => Err(ConfigError::Invalid(
                    "dataset source 'file' requires a path".into(),
                )),
            },
        }
    }
}

/// Read a JSON array of items.
pub fn read_items_json(path: &Path) -> Result<Vec<Item>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content)
        .map_err(|e| ConfigError::Parse(format!("items JSON {}: {e}", path.display())))
}
