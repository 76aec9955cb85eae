//! Compare SymNMF and k-means clustering of a point set
//!
//! Runs both methods end to end with their default settings and prints the
//! silhouette score of each.
//!
//! Usage: `analysis <k> <file_name>`

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use symnmf_rs::io::load_points;
use symnmf_rs::{
    compare, validate_cluster_count, Comparison, KMeans, KMeansConfig, SymNmf, SymNmfConfig,
    SymNmfError, DEFAULT_SEED,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// SymNMF versus k-means comparison driver
#[derive(Parser)]
#[command(name = "analysis")]
#[command(version)]
#[command(about = "Score SymNMF and k-means clusterings of a point set with the silhouette coefficient")]
struct Cli {
    /// Number of clusters, 1 <= k < number of points
    k: usize,

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
        Ok(scores) => {
            println!("nmf: {:.4}", scores.symnmf);
            println!("kmeans: {:.4}", scores.kmeans);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "analysis failed");
            eprintln!("An Error Has Occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Comparison, SymNmfError> {
    let points = load_points(&cli.file_name)?;
    validate_cluster_count(cli.k, points.nrows())?;

    info!(
        n = points.nrows(),
        d = points.ncols(),
        k = cli.k,
        seed = cli.seed,
        "running symnmf and k-means"
    );

    let mut symnmf = SymNmf::with_config(SymNmfConfig::new(cli.k).with_seed(cli.seed));
    symnmf.fit(&points.view())?;
    let factor = symnmf.factor().ok_or(SymNmfError::NotFitted)?;

    let mut kmeans = KMeans::with_config(KMeansConfig::new(cli.k));
    kmeans.train(&points.view())?;
    let centroids = kmeans.centroids().ok_or(SymNmfError::NotFitted)?;

    compare(&points.view(), &factor.view(), &centroids.view())
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
