//! # Main — CLI Entry Point
//!
//! Routes subcommands to the number-theory primitives in the library.
//!
//! ## Subcommands
//!
//! - `factor`: reads integers line-by-line from standard input and prints
//!   each one's prime-power decomposition. `#` starts a trailing comment;
//!   blank and comment-only lines are skipped. `--timelimit` bounds the
//!   wall-clock spent per integer.
//! - `is-prime`: Miller-Rabin probable-primality verdict for one integer.
//! - `next-prime`: first probable prime at or above the argument.
//! - `random-prime`: uniform random probable prime of a given bit length,
//!   optionally seeded for reproducible output.

mod cli;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rug::Integer;

#[derive(Parser)]
#[command(
    name = "primebasis",
    about = "Primality testing, trial-division factorization, and prime generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Factor integers read line-by-line from standard input
    Factor {
        /// Wall-clock budget per integer, in seconds (unbounded if omitted)
        #[arg(long)]
        timelimit: Option<f64>,
    },
    /// Test a single integer for probable primality
    IsPrime {
        /// The integer to test
        candidate: Integer,
    },
    /// Find the first probable prime at or above N
    NextPrime {
        /// Starting point of the search (inclusive)
        n: Integer,
    },
    /// Generate a uniform random probable prime of a given bit length
    RandomPrime {
        /// Bit length of the generated prime
        #[arg(long, default_value_t = 1024)]
        bits: i64,
        /// Deterministic seed for the shared generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine consumers,
    // human-readable on stderr otherwise.
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Factor { timelimit } => {
            let time_limit = timelimit.map(Duration::from_secs_f64);
            let stdin = std::io::stdin();
            cli::run_factor(stdin.lock(), &mut std::io::stdout(), time_limit)
        }
        Commands::IsPrime { candidate } => cli::run_is_prime(&candidate),
        Commands::NextPrime { n } => cli::run_next_prime(&n),
        Commands::RandomPrime { bits, seed } => cli::run_random_prime(bits, seed),
    }
}
