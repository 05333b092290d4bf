//! Strategy registry — the fixed set of named sort strategies.
//!
//! Eight strategies, each with a description and a business priority
//! (1–10, higher is more important). The set is closed: there is no runtime
//! registration. [`StrategyRegistry`] is an immutable lookup table built once
//! and handed to the sort engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Priority reported for names that are not in the registry.
pub const UNKNOWN_PRIORITY: u8 = 1;

/// A named ordering over catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    PriceAsc,
    PriceDesc,
    SalesConversionRatio,
    CreatedAtDesc,
    CreatedAtAsc,
    Popularity,
    Revenue,
    Name,
}

impl SortStrategy {
    /// Every strategy, in registry order.
    pub const ALL: [SortStrategy; 8] = [
        Self::PriceAsc,
        Self::PriceDesc,
        Self::SalesConversionRatio,
        Self::CreatedAtDesc,
        Self::CreatedAtAsc,
        Self::Popularity,
        Self::Revenue,
        Self::Name,
    ];

    /// Canonical identifier, as accepted by `FromStr` and written by serde.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::SalesConversionRatio => "sales_conversion_ratio",
            Self::CreatedAtDesc => "created_at_desc",
            Self::CreatedAtAsc => "created_at_asc",
            Self::Popularity => "popularity",
            Self::Revenue => "revenue",
            Self::Name => "name",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PriceAsc => "Price (Low to High)",
            Self::PriceDesc => "Price (High to Low)",
            Self::SalesConversionRatio => "Sales Conversion Ratio (Best Performers First)",
            Self::CreatedAtDesc => "Creation Date (Newest First)",
            Self::CreatedAtAsc => "Creation Date (Oldest First)",
            Self::Popularity => "Popularity (Most Viewed First)",
            Self::Revenue => "Revenue Generated (Highest First)",
            Self::Name => "Name (Alphabetical)",
        }
    }

    /// Business importance, 1–10.
    pub fn priority(&self) -> u8 {
        match self {
            Self::SalesConversionRatio => 10,
            Self::Revenue => 9,
            Self::Popularity => 8,
            Self::PriceAsc | Self::PriceDesc => 7,
            Self::CreatedAtDesc => 6,
            Self::CreatedAtAsc => 5,
            Self::Name => 4,
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| CatalogError::InvalidStrategy(s.to_string()))
    }
}

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub strategy: SortStrategy,
    pub name: &'static str,
    pub description: &'static str,
    pub priority: u8,
}

impl From<SortStrategy> for StrategyInfo {
    fn from(strategy: SortStrategy) -> Self {
        Self {
            strategy,
            name: strategy.name(),
            description: strategy.description(),
            priority: strategy.priority(),
        }
    }
}

/// Immutable strategy lookup table.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    entries: Vec<StrategyInfo>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            entries: SortStrategy::ALL.iter().copied().map(StrategyInfo::from).collect(),
        }
    }

    /// All strategies in fixed registry order.
    pub fn strategies(&self) -> Vec<SortStrategy> {
        self.entries.iter().map(|e| e.strategy).collect()
    }

    pub fn entries(&self) -> &[StrategyInfo] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&StrategyInfo> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Human description. Unknown names get a synthesized diagnostic string.
    pub fn describe(&self, name: &str) -> String {
        match self.get(name) {
            Some(info) => info.description.to_string(),
            None => format!("Unknown Strategy ({name})"),
        }
    }

    /// Business priority, [`UNKNOWN_PRIORITY`] for unknown names.
    pub fn priority(&self, name: &str) -> u8 {
        self.get(name).map_or(UNKNOWN_PRIORITY, |info| info.priority)
    }

    /// Resolve a name to its strategy, or `InvalidStrategy`.
    pub fn resolve(&self, name: &str) -> Result<SortStrategy, CatalogError> {
        self.get(name)
            .map(|info| info.strategy)
            .ok_or_else(|| CatalogError::InvalidStrategy(name.to_string()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
