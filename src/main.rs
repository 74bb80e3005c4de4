use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use multiplier::app::{handle_fatal_error, init_logging, AppConfig};
use multiplier::demo::{run_comparison, run_demo};
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Multiply numbers or repeat text by a factor
#[derive(Parser)]
#[command(name = "multiplier")]
#[command(about = "Multiply numbers or repeat text by a non-negative factor", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML file with advisory limits
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a single value
    Transform {
        /// Value as JSON (5, 2.5, "text", [1, 2]); anything that is not JSON is treated as text
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Multiplication factor
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        factor: i64,

        /// Never fail; print the structured result as JSON instead
        #[arg(long)]
        safe: bool,
    },
    /// Safely transform every element of a JSON list
    Batch {
        /// List of values as JSON, e.g. '[1, 2.5, "test"]'
        values: String,

        /// Multiplication factor
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        factor: i64,
    },
    /// Show direct, safe and batch calls on sample inputs
    Demo,
    /// Compare timings against a naive unvalidated baseline
    Compare {
        /// Iterations over the sample inputs
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };

    init_logging(&config);
    trace!("Resolved limits: {:?}", config.limits);

    if let Err(e) = run(cli.command, &config) {
        handle_fatal_error(e, config.verbose);
    }
}

fn run(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Transform {
            value,
            factor,
            safe,
        } => run_transform(&value, factor, safe, config),
        Commands::Batch { values, factor } => run_batch(&values, factor, config),
        Commands::Demo => {
            run_demo(config);
            Ok(())
        }
        Commands::Compare { iterations } => {
            run_comparison(config, iterations);
            Ok(())
        }
    }
}

fn run_transform(raw: &str, factor: i64, safe: bool, config: &AppConfig) -> Result<()> {
    let input = parse_input(raw);
    debug!("Transforming {} by {}", input, factor);

    if safe {
        let result = config.safe_invoker().safe_transform(&input, factor);
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        let value = config.transformer().transform(&input, factor)?;
        println!("{value}");
    }

    Ok(())
}

fn run_batch(raw: &str, factor: i64, config: &AppConfig) -> Result<()> {
    let values = parse_input(raw);
    let results = config.batch_runner().batch_transform(&values, factor)?;
    debug!("Transformed {} values", results.len());
    println!(
        "{}",
        serde_json::to_string_pretty(&results).context("Failed to serialize results")?
    );
    Ok(())
}

fn parse_input(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}
