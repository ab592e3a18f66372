//! Random number generation and bias-free bounded sampling.
//!
//! Provides seeded RNG construction and samplers that draw a uniformly
//! distributed integer from `[0, n)` given a full-width uniform source.
//!
//! # Why not `x % n`
//!
//! For a uniform W-bit word `x`, both `x % n` and the multiply-shift
//! reduction `(n·x) >> W` are biased whenever `n` does not divide `2^W`:
//! the `2^W mod n` smallest buckets receive one extra preimage each. The
//! samplers here remove the bias by rejecting exactly those draws whose
//! product residue `lo = (n·x) mod 2^W` falls below `2^W mod n`, which
//! leaves every bucket with the same number of preimages.
//!
//! The common case never divides: whenever `lo >= n` the draw cannot sit in
//! a biased bucket (the threshold `2^W mod n` is strictly below `n`), so it
//! is accepted without computing the modulus. Only a first-draw failure of
//! that check pays for one `%` per call.
//!
//! Reference: Lemire (2019), "Fast Random Integer Generation in an
//! Interval", *ACM Transactions on Modeling and Computer Simulation* 29(1).
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::widemul::widen_multiply;

/// Error type for invalid sampling bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The requested interval `[0, 0)` is empty; no value can be drawn.
    ZeroBound,
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::ZeroBound => write!(f, "sampling bound must be at least 1"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_sample::random::{create_rng, sample_u64};
///
/// let mut rng = create_rng(42);
/// let v = sample_u64(10, &mut rng).unwrap();
/// assert!(v < 10);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws a uniformly distributed `u32` from `[0, n)`, without bias.
///
/// 32-bit variant of [`sample_u64`]: the exact product of the draw and the
/// bound fits a native `u64`, so no extended-precision multiply is needed.
///
/// # Returns
/// - `Err(SampleError::ZeroBound)` if `n == 0`.
///
/// # Examples
/// ```
/// use u_sample::random::{create_rng, sample_u32};
///
/// let mut rng = create_rng(42);
/// assert!(sample_u32(100, &mut rng).unwrap() < 100);
/// assert_eq!(sample_u32(1, &mut rng), Ok(0));
/// assert!(sample_u32(0, &mut rng).is_err());
/// ```
pub fn sample_u32<R: Rng>(n: u32, rng: &mut R) -> Result<u32, SampleError> {
    if n == 0 {
        return Err(SampleError::ZeroBound);
    }
    if n == 1 {
        // The only value in [0, 1); skip the degenerate modulus-by-one path.
        return Ok(0);
    }

    let x: u32 = rng.random();
    let m = u64::from(x) * u64::from(n);
    let mut hi = (m >> 32) as u32;
    let mut lo = m as u32;
    if lo >= n {
        // Divisionless fast path: lo >= n > 2^32 mod n, so this draw
        // cannot be rejected.
        return Ok(hi);
    }

    let min_lo = n.wrapping_neg() % n; // == (2^32 - n) % n == 2^32 % n
    while lo < min_lo {
        let x: u32 = rng.random();
        let m = u64::from(x) * u64::from(n);
        hi = (m >> 32) as u32;
        lo = m as u32;
    }
    Ok(hi)
}

/// Draws a uniformly distributed `u64` from `[0, n)`, without bias.
///
/// # Algorithm
/// Multiply-shift reduction with rejection (see the module docs): draw a
/// full-width `x`, form the exact 128-bit product `m = x·n` via
/// [`widen_multiply`], and take `m.hi` as the candidate. Accept immediately
/// when `m.lo >= n`; otherwise compare against the exact rejection
/// threshold `2^64 mod n`, computed lazily at most once per call, and
/// redraw until the residue clears it.
///
/// The retry loop is unbounded by design. Rejection probability is
/// `(2^64 mod n) / 2^64 < n / 2^64`, so the expected number of draws is
/// just above one for every bound.
///
/// # Returns
/// - `Err(SampleError::ZeroBound)` if `n == 0`.
///
/// # Examples
/// ```
/// use u_sample::random::{create_rng, sample_u64};
///
/// let mut rng = create_rng(7);
/// let v = sample_u64(1_000_000, &mut rng).unwrap();
/// assert!(v < 1_000_000);
/// ```
pub fn sample_u64<R: Rng>(n: u64, rng: &mut R) -> Result<u64, SampleError> {
    if n == 0 {
        return Err(SampleError::ZeroBound);
    }
    if n == 1 {
        // The only value in [0, 1); skip the degenerate modulus-by-one path.
        return Ok(0);
    }

    let mut m = widen_multiply(rng.random(), n);
    if m.lo >= n {
        // Divisionless fast path: lo >= n > 2^64 mod n, so this draw
        // cannot be rejected.
        return Ok(m.hi);
    }

    let min_lo = n.wrapping_neg() % n; // == (2^64 - n) % n == 2^64 % n
    while m.lo < min_lo {
        m = widen_multiply(rng.random(), n);
    }
    Ok(m.hi)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ks_statistic;

    /// Pass/fail cutoff for the scaled K-S statistic, calibrated against
    /// SmallRng at roughly the 99.9% confidence level. Tunable.
    const KS_THRESHOLD: f64 = 2.0;

    /// Representative 32-bit bounds: a small constant, a power-of-two minus
    /// one, and bounds at ~50% and ~67% of the space.
    const KS_BOUNDS: [u32; 4] = [7, (1 << 24) - 1, 0x8000_0001, 0xAAAA_AAAA];

    const KS_DRAWS: usize = 1000;

    /// Always-divides rendition of the same rejection rule: computes the
    /// threshold up front on every call. Used to cross-check the optimized
    /// samplers.
    fn sample_u32_always_mod<R: Rng>(n: u32, rng: &mut R) -> u32 {
        let min_lo = u64::from(n.wrapping_neg() % n);
        loop {
            let x: u32 = rng.random();
            let m = u64::from(x) * u64::from(n);
            if (m & 0xFFFF_FFFF) >= min_lo {
                return (m >> 32) as u32;
            }
        }
    }

    #[test]
    fn test_zero_bound_fails_fast() {
        let mut rng = create_rng(0);
        assert_eq!(sample_u32(0, &mut rng), Err(SampleError::ZeroBound));
        assert_eq!(sample_u64(0, &mut rng), Err(SampleError::ZeroBound));
    }

    #[test]
    fn test_zero_bound_error_display() {
        let message = SampleError::ZeroBound.to_string();
        assert!(message.contains("bound"), "unhelpful message: {message}");
    }

    #[test]
    fn test_unit_bound_is_always_zero() {
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            assert_eq!(sample_u32(1, &mut rng), Ok(0));
            assert_eq!(sample_u64(1, &mut rng), Ok(0));
        }
    }

    #[test]
    fn test_sample_u32_within_bound() {
        let mut rng = create_rng(11);
        for n in [2, 3, 7, 100, 1 << 20, (1 << 31) - 1, u32::MAX] {
            for _ in 0..10_000 {
                let v = sample_u32(n, &mut rng).unwrap();
                assert!(v < n, "{v} >= {n}");
            }
        }
    }

    #[test]
    fn test_sample_u64_within_bound() {
        let mut rng = create_rng(12);
        for n in [2, 3, 7, 1000, 1 << 33, u64::MAX / 2, u64::MAX] {
            for _ in 0..10_000 {
                let v = sample_u64(n, &mut rng).unwrap();
                assert!(v < n, "{v} >= {n}");
            }
        }
    }

    #[test]
    fn test_small_bound_reaches_every_value() {
        let mut rng = create_rng(5);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[sample_u64(7, &mut rng).unwrap() as usize] = true;
        }
        assert_eq!(seen, [true; 7], "1000 draws should hit all of [0, 7)");
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let draws1: Vec<u64> = (0..100).map(|_| sample_u64(1000, &mut rng1).unwrap()).collect();
        let draws2: Vec<u64> = (0..100).map(|_| sample_u64(1000, &mut rng2).unwrap()).collect();
        assert_eq!(draws1, draws2);
    }

    #[test]
    fn test_distribution_is_uniform() {
        for n in KS_BOUNDS {
            for seed in [1, 2, 3] {
                let mut rng = create_rng(seed);
                let samples: Vec<u64> = (0..KS_DRAWS)
                    .map(|_| u64::from(sample_u32(n, &mut rng).unwrap()))
                    .collect();
                let ks = ks_statistic(&samples, u64::from(n)).unwrap();
                assert!(ks < KS_THRESHOLD, "n={n}, seed={seed}: K-S statistic {ks:.4}");
            }
        }
    }

    #[test]
    fn test_distribution_matches_always_mod_reference() {
        for n in KS_BOUNDS {
            let mut rng = create_rng(17);
            let samples: Vec<u64> = (0..KS_DRAWS)
                .map(|_| u64::from(sample_u32_always_mod(n, &mut rng)))
                .collect();
            let ks = ks_statistic(&samples, u64::from(n)).unwrap();
            assert!(ks < KS_THRESHOLD, "n={n}: K-S statistic {ks:.4}");
        }
    }

    /// The optimized sampler should clear the K-S cutoff at least as often
    /// as a known-good bounded generator over the same seeds.
    #[test]
    fn test_passes_as_often_as_known_good_generator() {
        let seeds: Vec<u64> = (0..10).collect();
        let trials = KS_BOUNDS.len() * seeds.len();
        let mut ours = 0;
        let mut reference = 0;
        for n in KS_BOUNDS {
            for &seed in &seeds {
                let mut rng = create_rng(seed);
                let samples: Vec<u64> = (0..KS_DRAWS)
                    .map(|_| u64::from(sample_u32(n, &mut rng).unwrap()))
                    .collect();
                if ks_statistic(&samples, u64::from(n)).unwrap() < KS_THRESHOLD {
                    ours += 1;
                }

                let mut rng = create_rng(seed);
                let samples: Vec<u64> = (0..KS_DRAWS)
                    .map(|_| u64::from(rng.random_range(0..n)))
                    .collect();
                if ks_statistic(&samples, u64::from(n)).unwrap() < KS_THRESHOLD {
                    reference += 1;
                }
            }
        }
        assert!(
            ours + 1 >= reference,
            "optimized sampler passed {ours}/{trials}, reference passed {reference}/{trials}"
        );
    }
}
