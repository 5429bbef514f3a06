use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};

use rug::rand::RandState;
use rug::Integer;

/// Default bit width for witness draws: witnesses fall in [2, 2^5] = [2, 32].
pub const DEFAULT_BASIS_BITS: u32 = 5;

thread_local! {
    static SHARED_RNG: RefCell<RandState<'static>> = RefCell::new({
        let mut rng = RandState::new();
        // Seed from the clock so separate runs do not repeat the same draws.
        // Not security-grade randomness, and not meant to be.
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        rng.seed(&Integer::from(now));
        rng
    });
}

/// Run `f` against the shared pseudorandom generator.
///
/// The shared generator is thread-local mutable state; callers that need
/// reproducible draws should pass their own [`RandState`] to
/// [`generate_basis`] instead.
pub fn with_shared_rng<R>(f: impl FnOnce(&mut RandState<'static>) -> R) -> R {
    SHARED_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Deterministically reseed the shared generator.
///
/// This affects every later draw on the current thread, not just the next
/// one. [`crate::prime_gen::random_prime`] uses it when given a seed.
pub fn reseed_shared_rng(seed: u64) {
    with_shared_rng(|rng| rng.seed(&Integer::from(seed)));
}

/// Yields uniform random integers in [2, 2^bits] to be used as witnesses
/// for a Miller-Rabin primality test.
///
/// With `count: Some(n)` the sequence yields exactly `n` values; with
/// `None` it never terminates on its own and the caller must impose its
/// own cutoff. Draws are independent, so repeats are expected at small
/// bit widths.
///
/// A random basis should be chosen: for any fixed set of bases it is
/// possible to construct strong pseudoprimes that pass Miller-Rabin
/// (F. Arnault, Mathematics of Computation 64(209), 1995).
pub fn generate_basis<'a>(
    count: Option<usize>,
    bits: u32,
    rng: &'a mut RandState<'static>,
) -> impl Iterator<Item = Integer> + 'a {
    // 2 + uniform[0, 2^bits - 2] covers [2, 2^bits] inclusive.
    let span = (Integer::from(1) << bits) - 1u32;
    let mut drawn = 0usize;
    std::iter::from_fn(move || {
        if let Some(limit) = count {
            if drawn >= limit {
                return None;
            }
            drawn += 1;
        }
        Some(span.clone().random_below(&mut *rng) + 2u32)
    })
}
