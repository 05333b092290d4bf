//! Reporting and export — JSON, CSV, and Markdown artifact generation.
//!
//! Three formats:
//! - **JSON**: single-sort and batch results, with schema versioning
//! - **CSV**: one ranking per file for spreadsheet comparison
//! - **Markdown**: side-by-side A/B comparison of the top of each ranking
//!
//! Persisted JSON carries a `schema_version` field. Future versions are
//! rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use shelfsort_core::{SortResult, SortStrategy};

use crate::result::{BatchResult, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

#[derive(Serialize)]
struct SortExport<'a> {
    schema_version: u32,
    #[serde(flatten)]
    result: &'a SortResult,
}

/// Serialize a single `SortResult` to pretty JSON.
pub fn export_sort_json(result: &SortResult) -> Result<String> {
    let export = SortExport {
        schema_version: SCHEMA_VERSION,
        result,
    };
    serde_json::to_string_pretty(&export).context("failed to serialize SortResult to JSON")
}

/// Serialize a `BatchResult` to pretty JSON.
pub fn export_batch_json(batch: &BatchResult) -> Result<String> {
    serde_json::to_string_pretty(batch).context("failed to serialize BatchResult to JSON")
}

/// Deserialize a `BatchResult` from JSON, rejecting unknown schema versions.
pub fn import_batch_json(json: &str) -> Result<BatchResult> {
    let batch: BatchResult =
        serde_json::from_str(json).context("failed to deserialize BatchResult from JSON")?;
    if batch.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            batch.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(batch)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export one ranking as CSV, rank starting at 1.
///
/// Columns: rank, id, name, price, sales, views, conversion_ratio, revenue,
/// created_at
pub fn export_ranking_csv(result: &SortResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "rank",
        "id",
        "name",
        "price",
        "sales",
        "views",
        "conversion_ratio",
        "revenue",
        "created_at",
    ])?;

    for (i, item) in result.items.iter().enumerate() {
        wtr.write_record([
            &(i + 1).to_string(),
            &item.id.to_string(),
            &item.name,
            &format!("{:.2}", item.price.value()),
            &item.sales_count.to_string(),
            &item.views_count.to_string(),
            &format!("{:.6}", item.conversion_ratio()),
            &format!("{:.2}", item.revenue()),
            &item.created_at.to_rfc3339(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for one batch run.
///
/// Creates `{label}_{timestamp}/` under `output_dir` containing the files
/// below. Characters in `label` other than ASCII alphanumerics, `-` and `_`
/// become `_`, so the directory always lands directly inside `output_dir`.
/// - `batch.json` — the full `BatchResult`
/// - `report.md` — the A/B comparison
/// - `{strategy}.csv` — one ranking per strategy
///
/// Returns the path to the created directory.
pub fn save_batch_artifacts(
    batch: &BatchResult,
    label: &str,
    top_n: usize,
    output_dir: &Path,
) -> Result<PathBuf> {
    let dirname = format!(
        "{}_{}",
        artifact_label(label),
        batch.executed_at.format("%Y%m%d_%H%M%S")
    );
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let json = export_batch_json(batch)?;
    std::fs::write(run_dir.join("batch.json"), &json)?;

    std::fs::write(run_dir.join("report.md"), render_batch_markdown(batch, top_n))?;

    for (strategy, result) in &batch.results {
        let csv = export_ranking_csv(result)?;
        std::fs::write(run_dir.join(format!("{}.csv", strategy.name())), &csv)?;
    }

    Ok(run_dir)
}

fn artifact_label(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "batch".to_string()
    } else {
        cleaned
    }
}

/// Load a `BatchResult` from an artifact directory's batch.json.
pub fn load_batch_artifacts(dir: &Path) -> Result<BatchResult> {
    let path = dir.join("batch.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_batch_json(&json)
}

// ─── Markdown reports ───────────────────────────────────────────────

/// Strategies by business priority (highest first), then name.
pub fn report_order(batch: &BatchResult) -> Vec<SortStrategy> {
    let mut order: Vec<SortStrategy> = batch.strategies().collect();
    order.sort_by(|a, b| {
        b.priority()
            .cmp(&a.priority())
            .then_with(|| a.name().cmp(b.name()))
    });
    order
}

fn md_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Markdown A/B comparison: metadata table, then one row per strategy with
/// the names of its first `top_n` items.
pub fn render_batch_markdown(batch: &BatchResult, top_n: usize) -> String {
    let mut md = String::with_capacity(1024);

    md.push_str("# Ranking Comparison\n\n");

    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Items | {} |\n", batch.item_count));
    md.push_str(&format!("| Strategies | {} |\n", batch.strategy_count));
    md.push_str(&format!(
        "| Total Time | {} µs |\n",
        batch.total_time.as_micros()
    ));
    md.push_str(&format!("| Dataset | {} |\n", batch.dataset_fingerprint.short()));
    md.push_str(&format!("| Executed | {} |\n", batch.executed_at.to_rfc3339()));
    md.push('\n');

    md.push_str(&format!("## Top {top_n}\n\n"));
    md.push_str("| Strategy | Priority | Description | Time (µs) |");
    for rank in 1..=top_n {
        md.push_str(&format!(" #{rank} |"));
    }
    md.push('\n');
    md.push_str("| --- | ---: | --- | ---: |");
    for _ in 0..top_n {
        md.push_str(" --- |");
    }
    md.push('\n');

    for strategy in report_order(batch) {
        let Some(result) = batch.get(strategy) else {
            continue;
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |",
            strategy.name(),
            strategy.priority(),
            strategy.description(),
            result.execution_time.as_micros()
        ));
        for rank in 0..top_n {
            match result.items.get(rank) {
                Some(item) => md.push_str(&format!(" {} |", md_cell(&item.name))),
                None => md.push_str(" - |"),
            }
        }
        md.push('\n');
    }

    md
}
