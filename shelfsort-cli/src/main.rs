//! Shelfsort CLI — rank catalog items and compare rankings.
//!
//! Commands:
//! - `strategies` — list every sort strategy with priority and description
//! - `demo` — sort the built-in sample catalog under every strategy, then A/B
//! - `sort` — rank items under one strategy
//! - `batch` — run an A/B experiment from a TOML config
//! - `analyze` — high/low performer split and catalog totals

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfsort_core::fixtures::sample_catalog;
use shelfsort_core::{Item, PerformanceAnalysis, SortResult, SortStrategy};
use shelfsort_runner::{
    export_sort_json, read_items_json, render_batch_markdown, save_batch_artifacts,
    CatalogService, ExperimentConfig,
};

#[derive(Parser)]
#[command(
    name = "shelfsort",
    about = "Shelfsort CLI — catalog ranking strategies and A/B comparison"
)]
struct Cli {
    /// Raise the default log level to debug (RUST_LOG still wins).
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported sort strategies.
    Strategies,
    /// Sort the sample catalog under every strategy, then run an A/B batch.
    Demo,
    /// Rank items under a single strategy.
    Sort {
        /// Strategy name (see `shelfsort strategies`).
        #[arg(long)]
        strategy: String,

        /// JSON array of items. Defaults to the sample catalog.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print the full result as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run an A/B experiment from a TOML config.
    Batch {
        /// Path to the experiment TOML.
        #[arg(long)]
        config: PathBuf,

        /// Write batch.json, report.md and per-strategy CSVs here.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the performance analysis of a catalog.
    Analyze {
        /// JSON array of items. Defaults to the sample catalog.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = CatalogService::default();

    match cli.command {
        Commands::Strategies => run_strategies(&service),
        Commands::Demo => run_demo(&service),
        Commands::Sort {
            strategy,
            input,
            json,
        } => run_sort(&service, &strategy, input.as_deref(), json),
        Commands::Batch { config, output_dir } => {
            run_batch(&service, &config, output_dir.as_deref())
        }
        Commands::Analyze { input } => run_analyze(&service, input.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_items(input: Option<&Path>) -> Result<Vec<Item>> {
    match input {
        Some(path) => read_items_json(path)
            .with_context(|| format!("failed to load items from {}", path.display())),
        None => Ok(sample_catalog()),
    }
}

fn run_strategies(service: &CatalogService) -> Result<()> {
    println!("{:<24} {:>8}  Description", "Strategy", "Priority");
    for info in service.engine().registry().entries() {
        println!(
            "{:<24} {:>8}  {}",
            info.name, info.priority, info.description
        );
    }
    Ok(())
}

fn run_demo(service: &CatalogService) -> Result<()> {
    let items = sample_catalog();

    println!("Sample catalog:");
    for item in &items {
        println!("  {item}");
    }
    println!();

    for strategy in service.list_supported_strategies() {
        let result = service.sort_products(Some(&items), strategy.name())?;
        println!("== {} ==", strategy.description());
        print_ranking(&result);
        println!();
    }

    let ab = [
        SortStrategy::PriceAsc,
        SortStrategy::SalesConversionRatio,
        SortStrategy::Popularity,
    ];
    let names: Vec<&str> = ab.iter().map(|s| s.name()).collect();
    let batch = service.batch_sort(Some(&items), names.as_slice())?;

    println!(
        "A/B batch: {} strategies over {} items in {} µs",
        batch.strategy_count,
        batch.item_count,
        batch.total_time.as_micros()
    );
    for strategy in ab {
        if let Some(top) = batch.get(strategy).and_then(|r| r.items.first()) {
            println!("  {:<24} top: {}", strategy.name(), top.name);
        }
    }
    Ok(())
}

fn run_sort(
    service: &CatalogService,
    strategy: &str,
    input: Option<&Path>,
    json: bool,
) -> Result<()> {
    let items = load_items(input)?;
    let result = service.sort_products(Some(&items), strategy)?;

    if json {
        println!("{}", export_sort_json(&result)?);
    } else {
        println!("{result}");
        print_ranking(&result);
    }
    Ok(())
}

fn run_batch(
    service: &CatalogService,
    config_path: &Path,
    output_dir: Option<&Path>,
) -> Result<()> {
    let config = ExperimentConfig::from_file(config_path)?;
    info!(
        path = %config_path.display(),
        experiment = %config.experiment.name,
        "loaded experiment config"
    );
    let batch = service.run_experiment(&config, None)?;

    print!("{}", render_batch_markdown(&batch, config.experiment.top_n));

    if let Some(dir) = output_dir {
        let run_dir =
            save_batch_artifacts(&batch, &config.experiment.name, config.experiment.top_n, dir)?;
        println!("\nArtifacts saved to: {}", run_dir.display());
    }
    Ok(())
}

fn run_analyze(service: &CatalogService, input: Option<&Path>) -> Result<()> {
    let items = load_items(input)?;
    let analysis = service.analyze_performance(Some(&items))?;
    print_analysis(&analysis);
    Ok(())
}

fn print_ranking(result: &SortResult) {
    for (rank, item) in result.items.iter().enumerate() {
        println!(
            "  {:>3}. {:<28} {:>11}  sales {:>6}  views {:>7}  conv {:>6.2}%",
            rank + 1,
            item.name,
            item.price.to_string(),
            item.sales_count,
            item.views_count,
            item.conversion_ratio() * 100.0
        );
    }
}

fn print_analysis(a: &PerformanceAnalysis) {
    println!("Items:               {}", a.total_items);
    println!(
        "High performers:     {} ({:.1}%)",
        a.high_performers.len(),
        a.high_performer_share() * 100.0
    );
    println!("Low performers:      {}", a.low_performers.len());
    println!("Average conversion:  {:.2}%", a.average_conversion * 100.0);
    println!("Total revenue:       ${:.2}", a.total_revenue);
    for item in &a.high_performers {
        println!("  * {item}");
    }
}
