mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::collateral::CollateralValueArgs;
use commands::pricing::PriceArgs;
use commands::risk::RiskArgs;
use gold_loan_core::risk::RiskModelConfig;

/// Risk-based gold loan pricing
#[derive(Parser)]
#[command(
    name = "glp",
    version,
    about = "Risk-based gold loan pricing",
    long_about = "Prices gold-backed loans with decimal precision: values the pledged gold, \
                  scores the borrower (PD, LTV, LGD), sizes the loan, and builds the \
                  interest rate from funding cost, expected loss, capital charge, \
                  operating cost and profit margin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// JSON or YAML file overriding the scorecard coefficients
    #[arg(long, global = true)]
    model_config: Option<String>,

    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a gold loan: loan amount and risk-adjusted rate
    Price(PriceArgs),
    /// Score a borrower: PD, LTV and LGD with factor breakdowns
    Risk(RiskArgs),
    /// Value pledged gold at a spot rate
    Collateral(CollateralValueArgs),
    /// List the purity grades and fineness multipliers
    PurityTable,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "gold_loan_core=debug,glp=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_model(path: Option<&str>) -> Result<Option<RiskModelConfig>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let config: RiskModelConfig = input::file::read_document(p)?;
            debug!(version = %config.version, path = p, "loaded scorecard override");
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> =
        load_model(cli.model_config.as_deref()).and_then(|model| match cli.command {
            Commands::Price(args) => commands::pricing::run_price(args, model),
            Commands::Risk(args) => commands::risk::run_risk(args, model),
            Commands::Collateral(args) => commands::collateral::run_collateral(args),
            Commands::PurityTable => commands::collateral::run_purity_table(),
            Commands::Version => {
                println!("glp {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
        });

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
