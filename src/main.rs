use anyhow::{Context, anyhow};
use api_client::{HistoryCache, YahooClient};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use core_types::{Interval, Symbol, or_na};
use engine::{AnalysisPipeline, AnalysisReport};
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use summarizer::{GeminiSummarizer, PlainSummarizer, Summarizer};

/// How many of the most recent observations the price table shows.
const RECENT_ROWS: usize = 10;

/// The main entry point for the Tickerlens application.
#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; settings may come from the environment directly.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Price history, technical indicators and performance statistics for listed instruments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one instrument against a benchmark.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The ticker symbol to analyze (e.g., "AAPL", "BRK.B").
    #[arg(long)]
    symbol: String,

    /// The history range: 6mo, 1y, 5y or max.
    #[arg(long, default_value = "1y")]
    interval: Interval,

    /// Compare against this symbol instead of the configured benchmark.
    #[arg(long)]
    benchmark: Option<Symbol>,

    /// Print the full report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

async fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config().context("Failed to load configuration")?;
    if let Some(benchmark) = args.benchmark {
        config.benchmark.symbol = benchmark;
    }
    let _log_guard = configuration::init_tracing(&config.logging)?;

    let source = Arc::new(YahooClient::new(&config.data_source)?);
    let summarizer: Arc<dyn Summarizer> = match GeminiSummarizer::new(&config.summarizer) {
        Some(gemini) => Arc::new(gemini),
        None => Arc::new(PlainSummarizer),
    };
    let pipeline = AnalysisPipeline::new(source, HistoryCache::new(), summarizer, &config)
        .map_err(|e| anyhow!(e.user_message()))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(format!(
        "Analyzing {} over {}...",
        args.symbol.trim(),
        args.interval.label()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = pipeline.run(&args.symbol, args.interval).await;
    spinner.finish_and_clear();

    let report = outcome.map_err(|e| anyhow!(e.user_message()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render(&report);
    }
    Ok(())
}

// ==============================================================================
// Rendering
// ==============================================================================

fn render(report: &AnalysisReport) {
    let metadata = &report.metadata;
    println!(
        "\n{} ({}) - {}\n",
        or_na(metadata.long_name.as_deref()),
        metadata.symbol,
        report.interval.label()
    );

    let mut key_data = new_table(vec!["Current price", "Previous close", "Open", "Beta"]);
    key_data.add_row(vec![
        or_na(metadata.current_price),
        or_na(metadata.previous_close),
        or_na(metadata.open),
        or_na(metadata.beta.map(|b| format!("{:.2}", b))),
    ]);
    println!("Key data\n{}\n", key_data);

    println!("{}\n", report.summary);

    let mut prices = new_table(vec!["Date", "Close", "Volume", "MA", "Upper band", "Lower band"]);
    let skip = report.history.len().saturating_sub(RECENT_ROWS);
    for (point, row) in report.history.iter().skip(skip) {
        prices.add_row(vec![
            point.date.to_string(),
            point.close.to_string(),
            point.volume.to_string(),
            fixed(row.moving_average),
            fixed(row.upper_band),
            fixed(row.lower_band),
        ]);
    }
    println!("Recent prices\n{}\n", prices);

    let mut returns = new_table(vec!["Period", "Return"]);
    for row in &report.performance.returns {
        returns.add_row(vec![row.label.to_string(), percent_decimal(row.return_pct)]);
    }
    println!("Performance as of {}\n{}\n", report.performance.as_of, returns);

    let mut cagr = new_table(vec!["Period", "CAGR"]);
    for row in &report.performance.cagr {
        cagr.add_row(vec![format!("{} years", row.years), percent(row.rate)]);
    }
    println!("Compound annual growth rate\n{}\n", cagr);

    println!(
        "Annualized volatility: {}\n",
        percent(report.performance.annualized_volatility)
    );

    let comparison = &report.benchmark;
    let (instrument_last, benchmark_last) = comparison.last_values();
    let mut overlay = new_table(vec!["Series", "Normalized (start = 100)"]);
    overlay.add_row(vec![comparison.symbol.to_string(), fixed(instrument_last)]);
    overlay.add_row(vec![comparison.benchmark_symbol.to_string(), fixed(benchmark_last)]);
    println!("Versus benchmark\n{}", overlay);
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(Cell::new).collect::<Vec<_>>());
    table
}

const UNDETERMINED: &str = "N/D";

fn fixed(value: Option<f64>) -> String {
    value.map_or_else(|| UNDETERMINED.to_string(), |v| format!("{:.2}", v))
}

fn percent(fraction: Option<f64>) -> String {
    fraction.map_or_else(|| UNDETERMINED.to_string(), |f| format!("{:.2}%", f * 100.0))
}

fn percent_decimal(pct: Option<Decimal>) -> String {
    pct.map_or_else(|| UNDETERMINED.to_string(), |p| format!("{:.2}%", p))
}
