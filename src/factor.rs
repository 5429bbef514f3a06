//! # Factor — Trial-Division Prime Factorization
//!
//! Decomposes a candidate into prime powers by trying successive divisors
//! starting at 2. Deliberately simple: divisors increment by 1 with no
//! odd-only or prime-only skipping, costing O(√candidate) trials in the
//! worst case. The loop stops once the trial divisor squared exceeds the
//! remaining residual, which proves any residual above 1 prime.
//!
//! An optional wall-clock budget truncates the search: the check runs
//! once per divisor increment, so a slow trial can overshoot the budget
//! by one iteration. On truncation the current residual is emitted as a
//! final `(remainder, 1)` term even though it may itself be composite.
//! This is a defined early-termination behavior, not an error.

use std::time::{Duration, Instant};

use rug::Integer;
use tracing::debug;

/// Lazily factor `candidate` into `(prime, exponent)` terms.
///
/// Terms are produced in increasing prime order as they are found; a
/// candidate of 1 yields nothing. `time_limit: None` never truncates.
pub fn pfactors(candidate: &Integer, time_limit: Option<Duration>) -> PrimeFactors {
    PrimeFactors {
        remainder: candidate.clone(),
        divisor: Integer::from(2u32),
        started: Instant::now(),
        time_limit,
        expired: false,
        done: false,
    }
}

/// Iterator over the prime-power terms of a factorization. See
/// [`pfactors`] for termination and truncation semantics.
pub struct PrimeFactors {
    remainder: Integer,
    divisor: Integer,
    started: Instant,
    time_limit: Option<Duration>,
    expired: bool,
    done: bool,
}

impl Iterator for PrimeFactors {
    type Item = (Integer, u32);

    fn next(&mut self) -> Option<(Integer, u32)> {
        if self.done {
            return None;
        }
        while !self.expired && Integer::from(&self.divisor * &self.divisor) <= self.remainder {
            let mut exponent = 0u32;
            while self.remainder.is_divisible(&self.divisor) {
                self.remainder.div_exact_mut(&self.divisor);
                exponent += 1;
            }
            let term = (exponent > 0).then(|| (self.divisor.clone(), exponent));
            self.divisor += 1u32;

            // Advisory budget check, once per divisor.
            if let Some(limit) = self.time_limit {
                if self.started.elapsed() > limit {
                    self.expired = true;
                    debug!(
                        remainder = %self.remainder,
                        "time limit reached, emitting unverified residual"
                    );
                }
            }
            if term.is_some() {
                return term;
            }
        }
        self.done = true;
        if self.remainder != 1u32 {
            Some((self.remainder.clone(), 1))
        } else {
            None
        }
    }
}
