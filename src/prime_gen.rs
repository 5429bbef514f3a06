//! Prime generation built on the Miller-Rabin tester: the next probable
//! prime at or above a starting point, and uniform random probable primes
//! of a requested bit length.

use anyhow::{bail, Result};
use rug::Integer;

use crate::basis;
use crate::miller_rabin::is_probable_prime;

/// Return the first probable prime at or above `n`, including `n` itself.
///
/// Loops by incrementing, which always terminates for positive input by
/// the infinitude of primes. Non-positive input is not guarded against.
pub fn next_prime(n: &Integer) -> Integer {
    let mut candidate = n.clone();
    while !is_probable_prime(&candidate) {
        candidate += 1u32;
    }
    candidate
}

/// Return a uniform random probable prime of exactly `bits` bits, i.e.
/// drawn from [2^(bits-1), 2^bits - 1] until one passes the test.
///
/// Fails for `bits <= 1`: no primes of that bit length exist under this
/// definition. A provided seed deterministically reseeds the shared
/// generator, which affects every later draw on the thread, not just
/// this call. Expected draw count is O(bits·ln 2) by prime density.
pub fn random_prime(bits: i64, seed: Option<u64>) -> Result<Integer> {
    if bits <= 1 {
        bail!("no prime numbers of the provided bit length ({bits})");
    }
    let Ok(bits) = u32::try_from(bits) else {
        bail!("bit length {bits} is out of range");
    };
    if let Some(seed) = seed {
        basis::reseed_shared_rng(seed);
    }

    // floor = 2^(bits-1); the width of [2^(bits-1), 2^bits - 1] is also
    // 2^(bits-1), so one uniform draw below the floor covers the range.
    let floor = Integer::from(1) << (bits - 1);
    loop {
        let candidate = basis::with_shared_rng(|rng| {
            Integer::from(&floor) + floor.clone().random_below(&mut *rng)
        });
        if is_probable_prime(&candidate) {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_prime_returns_prime_input_unchanged() {
        assert_eq!(next_prime(&Integer::from(2u32)), 2u32);
        assert_eq!(next_prime(&Integer::from(3u32)), 3u32);
        assert_eq!(next_prime(&Integer::from(7591u32)), 7591u32);
    }

    #[test]
    fn next_prime_advances_past_composites() {
        assert_eq!(next_prime(&Integer::from(4u32)), 5u32);
        assert_eq!(next_prime(&Integer::from(20u32)), 23u32);
        assert_eq!(next_prime(&Integer::from(7588u32)), 7589u32);
    }

    #[test]
    fn two_bit_primes_are_two_or_three() {
        for _ in 0..20 {
            let p = random_prime(2, None).unwrap();
            assert!(p == 2u32 || p == 3u32, "unexpected 2-bit prime {}", p);
        }
    }

    #[test]
    fn three_bit_primes_are_five_or_seven() {
        for _ in 0..20 {
            let p = random_prime(3, None).unwrap();
            assert!(p == 5u32 || p == 7u32, "unexpected 3-bit prime {}", p);
        }
    }

    #[test]
    fn degenerate_bit_lengths_are_rejected() {
        for bits in [1i64, 0, -4] {
            let err = random_prime(bits, None).unwrap_err();
            assert!(
                err.to_string().contains("bit length"),
                "unexpected error for bits={}: {}",
                bits,
                err
            );
        }
    }

    #[test]
    fn distinct_seeds_give_distinct_primes() {
        let a = random_prime(128, Some(1)).unwrap();
        let b = random_prime(128, Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn identical_seeds_reproduce_the_same_prime() {
        let a = random_prime(128, Some(99)).unwrap();
        let b = random_prime(128, Some(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_primes_have_the_requested_width() {
        let p = random_prime(1024, None).unwrap();
        assert!(p > (Integer::from(1) << 1023u32) - 1u32);
        assert!(p < Integer::from(1) << 1024u32);
        assert_eq!(p.significant_bits(), 1024);
    }
}
