//! Inspect the similarity graph or the SymNMF factor of a point set
//!
//! Reads comma-separated points, computes the matrix selected by `goal` and
//! prints it one row per line with 4 decimals.
//!
//! Usage: `symnmf <k> <sym|ddg|norm|symnmf> <file_name>`

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use symnmf_rs::io::{format_matrix, load_points};
use symnmf_rs::{Goal, SymNmfConfig, SymNmfError, DEFAULT_SEED};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

/// Similarity graph and SymNMF factor inspector
#[derive(Parser)]
#[command(name = "symnmf")]
#[command(version)]
#[command(about = "Print the similarity, degree, normalized or SymNMF factor matrix of a point set")]
struct Cli {
    /// Number of clusters, 1 <= k < number of points
    k: usize,

    /// Matrix to print: sym, ddg, norm or symnmf
    goal: String,

    /// Comma-separated point file, one point per line, no header
    file_name: PathBuf,

    /// Seed for the initial SymNMF factor
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "symnmf failed");
            eprintln!("An Error Has Occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, SymNmfError> {
    let goal: Goal = cli.goal.parse()?;
    let points = load_points(&cli.file_name)?;

    let config = SymNmfConfig::new(cli.k).with_seed(cli.seed);
    let matrix = goal.compute(&points.view(), &config)?;

    Ok(format_matrix(&matrix.view()))
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
