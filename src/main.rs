//! Command-line entry point: run the accuracy experiment and print the report.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use product_accuracy::{Config, experiment};

/// Compare the accuracy of a naive product and a log-sum-exp product of random `f64` against an
/// arbitrary precision reference, in the original order and shuffled.
#[derive(Parser, Debug)]
#[command(name = "product-accuracy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
  /// Number of values to multiply
  #[arg(short = 'n', long, default_value_t = Config::default().sample_count)]
  count: usize,

  /// Lower bound of the values (inclusive)
  #[arg(long, default_value_t = Config::default().value_range.0)]
  min: f64,

  /// Upper bound of the values (exclusive)
  #[arg(long, default_value_t = Config::default().value_range.1)]
  max: f64,

  /// Significand precision of the reference product, in bits
  #[arg(short = 'p', long, default_value_t = Config::default().reference_precision_bits)]
  precision_bits: u64,

  /// Seed of the random generator
  #[arg(short, long, default_value_t = Config::default().seed)]
  seed: u64,
}

impl From<Cli> for Config {
  fn from(cli: Cli) -> Self {
    Config {
      sample_count: cli.count,
      value_range: (cli.min, cli.max),
      reference_precision_bits: cli.precision_bits,
      seed: cli.seed,
    }
  }
}

fn main() -> ExitCode {
  // Logs go to stderr, so they never interleave with the report on stdout
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  tracing::debug!(?cli, "parsed arguments");

  match experiment::run(&Config::from(cli)) {
    Ok(report) => {
      print!("{report}");
      ExitCode::SUCCESS
    },
    Err(error) => {
      tracing::error!(%error, "experiment failed");
      eprintln!("error: {error}");
      ExitCode::FAILURE
    },
  }
}
