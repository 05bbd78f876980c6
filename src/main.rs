//! `topsis` command-line entry point.
//!
//! ```text
//! topsis <InputDataFile> <Weights> <Impacts> <ResultFileName>
//! topsis data.csv "1,1,1,2" "+,+,-,+" result.csv
//! ```

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use u_topsis::pipeline::rank_file;
use u_topsis::topsis::{TiePolicy, TopsisConfig};

const USAGE: &str = "Usage: topsis <InputDataFile> <Weights> <Impacts> <ResultFileName>";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ties {
    /// Tied scores share a rank, next rank skips (1224)
    Competition,
    /// Tied scores share a rank, next rank follows (1223)
    Dense,
}

impl From<Ties> for TiePolicy {
    fn from(t: Ties) -> Self {
        match t {
            Ties::Competition => TiePolicy::Competition,
            Ties::Dense => TiePolicy::Dense,
        }
    }
}

/// Rank alternatives with TOPSIS.
#[derive(Debug, Parser)]
#[command(name = "topsis", version, about)]
struct Cli {
    /// CSV file: label column followed by numeric criterion columns
    input: PathBuf,

    /// Comma-separated criterion weights, e.g. "1,1,1,2"
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' (benefit) or '-' (cost), e.g. "+,+,-,+"
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Output CSV path
    output: PathBuf,

    /// Decimal digits in reported scores
    #[arg(long, default_value_t = 3)]
    precision: u32,

    /// Rank assignment for tied scores
    #[arg(long, value_enum, default_value_t = Ties::Competition)]
    ties: Ties,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues => {
                println!("{USAGE}");
                return ExitCode::FAILURE;
            }
            _ => {
                eprint!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let config = TopsisConfig::default()
        .with_precision(cli.precision)
        .with_tie_policy(cli.ties.into());

    match rank_file(&cli.input, &cli.weights, &cli.impacts, &cli.output, &config) {
        Ok(_) => {
            println!("Results saved to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
