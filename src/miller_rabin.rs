//! # Miller–Rabin — Probabilistic Primality Testing
//!
//! Decides "probable prime" or "composite" for arbitrary-precision
//! candidates. A candidate that passes every round is a *probable* prime,
//! never a proven one: for k independent random witnesses the
//! false-positive probability is at most 4^-k, so the default of 15
//! rounds leaves roughly one chance in 4^15.
//!
//! Witnesses come from [`crate::basis::generate_basis`] and are drawn at
//! random rather than taken from a fixed table, because fixed bases admit
//! strong pseudoprimes (Arnault's construction). The pseudorandomness is
//! not security-grade, which makes this module unsuitable for
//! cryptographic use but sufficient for search and factorization work.
//!
//! ## Algorithm
//!
//! For odd n > 2, write n - 1 = d·2^s with d odd. A witness a passes if
//! a^d ≡ ±1 (mod n) or some repeated squaring of a^d reaches n - 1
//! before the 2-adic exponent is exhausted. Any witness that fails proves
//! n composite and ends the test immediately.
//!
//! ## References
//!
//! - F. Arnault, "Constructing Carmichael numbers which are strong
//!   pseudoprimes to several bases", Mathematics of Computation,
//!   64(209), 1995.

use rug::Integer;

use crate::basis::{self, DEFAULT_BASIS_BITS};

/// Witness count used by [`is_probable_prime`].
pub const DEFAULT_ROUNDS: usize = 15;

/// Return whether `candidate` passes the Miller-Rabin test for every
/// supplied witness.
///
/// Accepts any iterable of witnesses; the sequence order only matters in
/// that the loop stops at the first witness proving compositeness.
/// Edge cases: 2 is prime, 1 is not, and even candidates above 2 are
/// composite without consulting any witness.
pub fn miller_rabin<I>(candidate: &Integer, witnesses: I) -> bool
where
    I: IntoIterator<Item = Integer>,
{
    if *candidate == 2u32 {
        return true;
    }
    if *candidate == 1u32 {
        return false;
    }
    if candidate.is_even() {
        return false;
    }

    // candidate - 1 = d * 2^s with d odd. Witness-independent, so hoisted
    // out of the loop.
    let n_minus_1 = Integer::from(candidate - 1u32);
    let s = n_minus_1.find_one(0).expect("candidate - 1 is nonzero");
    let d = Integer::from(&n_minus_1 >> s);

    for witness in witnesses {
        if Integer::from(witness.gcd_ref(candidate)) != 1u32 {
            if witness >= *candidate {
                // A witness at or above the candidate cannot be
                // informative; treat it as vacuously passing.
                continue;
            }
            // Proper common factor found.
            return false;
        }

        let mut x = witness
            .pow_mod(&d, candidate)
            .expect("exponent is non-negative");
        let mut probable = x == 1u32 || x == n_minus_1;
        for _ in 0..s {
            if probable {
                break;
            }
            x = Integer::from(&x * &x) % candidate;
            if x == n_minus_1 {
                probable = true;
            }
        }
        if !probable {
            return false;
        }
    }
    true
}

/// Return whether `candidate` is a probable prime.
///
/// Draws [`DEFAULT_ROUNDS`] witnesses from the shared generator at the
/// default bit width and runs [`miller_rabin`]. Witnesses are drawn
/// lazily, so a candidate proven composite early consumes less entropy.
pub fn is_probable_prime(candidate: &Integer) -> bool {
    basis::with_shared_rng(|rng| {
        let witnesses = basis::generate_basis(Some(DEFAULT_ROUNDS), DEFAULT_BASIS_BITS, rng);
        miller_rabin(candidate, witnesses)
    })
}
