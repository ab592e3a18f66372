//! Empirical distributions and uniformity testing.
//!
//! Builds empirical distribution curves from integer samples and computes
//! the one-sample Kolmogorov–Smirnov statistic against the ideal discrete
//! uniform CDF. The statistic is a diagnostic for test harnesses, not a
//! production sampling decision: it quantifies how far a finite sample sits
//! from uniformity, scaled so a fixed cutoff works across sample sizes.
//!
//! All functions treat degenerate data inputs (empty samples, zero bound)
//! by returning `None` or an empty curve rather than panicking.
//!
//! Reference: Knuth (1997), *TAOCP* Vol. 2, §3.3.1, "General Test
//! Procedures for Studying Random Data".

use std::collections::BTreeMap;

/// A point of an empirical distribution curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Sample value, shifted up by one so that a complete bucket has ideal
    /// CDF `x / bound`.
    pub x: f64,
    /// Relative or cumulative frequency, depending on the producing call.
    pub y: f64,
}

/// Returns the relative frequency of each distinct sample value, ascending.
///
/// Occurrences are counted in an ordered map, then normalized by the sample
/// size. Each returned `x` is `value + 1`: the empirical CDF then lines up
/// with the ideal `F(v) = (v+1)/bound` of a discrete uniform on
/// `{0, …, bound−1}`.
///
/// Returns an empty curve for an empty sample.
///
/// # Examples
/// ```
/// use u_sample::stats::frequency;
///
/// let curve = frequency(&[1, 1, 3]);
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve[0].x, 2.0); // value 1, shifted
/// assert!((curve[0].y - 2.0 / 3.0).abs() < 1e-15);
/// ```
pub fn frequency(samples: &[u64]) -> Vec<Point> {
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    for &value in samples {
        *counts.entry(value).or_insert(0) += 1;
    }
    let total = samples.len() as f64;
    counts
        .into_iter()
        .map(|(value, count)| Point {
            x: value as f64 + 1.0,
            y: count as f64 / total,
        })
        .collect()
}

/// Returns the empirical cumulative distribution of the samples, ascending.
///
/// Same points as [`frequency`], with each `y` replaced by the running sum
/// of relative frequencies. The final point's `y` is 1 (up to rounding).
pub fn cumulative(samples: &[u64]) -> Vec<Point> {
    let mut acc = 0.0;
    frequency(samples)
        .into_iter()
        .map(|p| {
            acc += p.y;
            Point { x: p.x, y: acc }
        })
        .collect()
}

/// Computes the scaled one-sample Kolmogorov–Smirnov statistic of the
/// samples against the discrete uniform distribution on `{0, …, bound−1}`.
///
/// # Algorithm
/// Builds the empirical CDF via [`cumulative`], takes the maximum absolute
/// deviation from the ideal CDF `x / bound` over the observed points, and
/// scales by `sqrt(len)` so the same cutoff applies regardless of sample
/// size. For a uniform source the statistic concentrates near 0.87; values
/// above ~2 occur with probability around 10⁻³.
///
/// The cutoff itself is calibrated empirically against a reference
/// generator (see the crate tests); this function only reports the
/// statistic.
///
/// # Returns
/// - `None` if `samples` is empty or `bound == 0` (no CDF can be formed).
///
/// # Examples
/// ```
/// use u_sample::stats::ks_statistic;
///
/// // A perfectly uniform synthetic sample deviates by nothing.
/// let samples: Vec<u64> = (0..100).collect();
/// assert!(ks_statistic(&samples, 100).unwrap() < 1e-12);
///
/// assert_eq!(ks_statistic(&[], 100), None);
/// assert_eq!(ks_statistic(&[1, 2, 3], 0), None);
/// ```
pub fn ks_statistic(samples: &[u64], bound: u64) -> Option<f64> {
    if samples.is_empty() || bound == 0 {
        return None;
    }
    let mut max_diff = 0.0_f64;
    for p in cumulative(samples) {
        let ideal = p.x / bound as f64;
        let diff = (p.y - ideal).abs();
        if diff > max_diff {
            max_diff = diff;
        }
    }
    Some((samples.len() as f64).sqrt() * max_diff)
}

// ============================================================================
// Tests
// ============================================================================
