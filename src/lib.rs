//! # u-sample
//!
//! Bias-free bounded random sampling for the U-Engine ecosystem.
//!
//! Given a source of uniformly distributed full-width integers, this crate
//! draws integers from `[0, n)` with zero bias. The naive `n·x / 2^W`
//! reduction is biased whenever `n` does not divide `2^W`; the samplers here
//! use Lemire's nearly-divisionless rejection method on top of an exact
//! extended-precision multiply, and the crate ships the statistical harness
//! used to verify the uniformity claim empirically.
//!
//! ## Modules
//!
//! - [`widemul`] — exact 128-bit products of 64-bit integers
//! - [`random`] — seeded RNG construction and the bounded samplers
//! - [`stats`] — empirical CDFs and the Kolmogorov–Smirnov uniformity statistic
//! - [`graph`] — scale-free network generation built on the samplers
//!
//! ## Design Philosophy
//!
//! - **Exact arithmetic first**: the rejection rule is only correct when the
//!   product `x·n` is computed without precision loss
//! - **Injected randomness**: samplers take `&mut R where R: Rng`; the
//!   seed/reseed lifecycle belongs to the caller
//! - **Property-based testing**: sampling invariants verified via proptest,
//!   distributional claims via the in-crate K-S statistic

pub mod graph;
pub mod random;
pub mod stats;
pub mod widemul;
