//! Performance analysis — high/low performer split and catalog-wide totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{average_conversion_ratio, total_revenue, Item};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub total_items: usize,
    pub high_performers: Vec<Item>,
    /// Everything that is not a high performer.
    pub low_performers: Vec<Item>,
    pub average_conversion: f64,
    pub total_revenue: f64,
    pub generated_at: DateTime<Utc>,
}

impl PerformanceAnalysis {
    /// Analyze items, preserving input order within each group.
    pub fn compute(items: &[Item]) -> Self {
        let (high_performers, low_performers): (Vec<Item>, Vec<Item>) =
            items.iter().cloned().partition(Item::is_high_performer);

        Self {
            total_items: items.len(),
            high_performers,
            low_performers,
            average_conversion: average_conversion_ratio(items),
            total_revenue: total_revenue(items),
            generated_at: Utc::now(),
        }
    }

    /// Share of items that are high performers. 0.0 when empty.
    pub fn high_performer_share(&self) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        self.high_performers.len() as f64 / self.total_items as f64
    }
}
