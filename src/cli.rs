//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand and the line conventions of the
//! `factor` stream: one non-negative integer per line, `#` trailing
//! comments, blank and comment-only lines skipped.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use rug::Integer;
use tracing::info;

use primebasis::factor::pfactors;
use primebasis::miller_rabin::is_probable_prime;
use primebasis::prime_gen::{next_prime, random_prime};

/// Parse one input line into a candidate integer.
///
/// Returns `Ok(None)` for blank and comment-only lines. Anything left
/// after comment stripping must be a plain decimal integer.
fn parse_line(line: &str) -> Result<Option<Integer>> {
    let uncommented = line.split('#').next().unwrap_or("").trim();
    if uncommented.is_empty() {
        return Ok(None);
    }
    if !uncommented.chars().all(|c| c.is_ascii_digit()) {
        bail!("input must be a positive integer (e.g., '34'), got {uncommented:?}");
    }
    let candidate = uncommented
        .parse::<Integer>()
        .with_context(|| format!("parsing {uncommented:?}"))?;
    Ok(Some(candidate))
}

/// Factor each integer read from `input`, one per line, rendering every
/// term as `"<prime>^<exponent>, "` followed by a newline per integer.
pub fn run_factor(
    input: impl BufRead,
    output: &mut impl Write,
    time_limit: Option<Duration>,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading input")?;
        let Some(candidate) = parse_line(&line)? else {
            continue;
        };
        for (prime, exponent) in pfactors(&candidate, time_limit) {
            write!(output, "{prime}^{exponent}, ")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn run_is_prime(candidate: &Integer) -> Result<()> {
    if is_probable_prime(candidate) {
        println!("prime");
    } else {
        println!("composite");
    }
    Ok(())
}

pub fn run_next_prime(n: &Integer) -> Result<()> {
    println!("{}", next_prime(n));
    Ok(())
}

pub fn run_random_prime(bits: i64, seed: Option<u64>) -> Result<()> {
    info!(bits, "generating random probable prime");
    println!("{}", random_prime(bits, seed)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# just a comment").unwrap(), None);
    }

    #[test]
    fn trailing_comments_are_stripped() {
        assert_eq!(parse_line("34 # thirty-four").unwrap(), Some(Integer::from(34u32)));
        assert_eq!(parse_line("  20  ").unwrap(), Some(Integer::from(20u32)));
    }

    #[test]
    fn non_integer_lines_are_rejected() {
        for line in ["abc", "-5", "3.14", "12 34"] {
            assert!(parse_line(line).is_err(), "line {:?} was accepted", line);
        }
    }

    #[test]
    fn factor_stream_renders_terms_per_line() {
        let input = b"20\n1\n19683 # a power of three\n" as &[u8];
        let mut output = Vec::new();
        run_factor(input, &mut output, None).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "2^2, 5^1, \n\n3^9, \n"
        );
    }

    #[test]
    fn factor_stream_fails_on_malformed_line() {
        let input = b"20\nnot-a-number\n" as &[u8];
        let mut output = Vec::new();
        let err = run_factor(input, &mut output, None).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }
}
