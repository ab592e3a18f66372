//! Exact 128-bit products of 64-bit integers.
//!
//! The bounded samplers need the full product of a random 64-bit word and
//! its bound. Truncating that product to 64 bits is the classical pitfall
//! this module exists to avoid: the rejection rule in [`crate::random`] is
//! only correct when both halves of the product are exact.
//!
//! # Algorithm
//!
//! Schoolbook multiplication on 32-bit halves. Each partial product of two
//! halves fits in 64 bits, so the four partials can be accumulated with
//! 64-bit adds, propagating one explicit carry between the halves:
//!
//! ```text
//! x·y = d·2^64 + (b + c)·2^32 + a
//!
//!     where  a = x_lo·y_lo,  b = x_hi·y_lo,  c = x_lo·y_hi,  d = x_hi·y_hi
//! ```
//!
//! The middle column `a_hi + b_lo + c_lo` can exceed 32 bits; its overflow
//! is the carry into the high half. Dropping that carry is the one way this
//! computation can go wrong, so it is added explicitly.
//!
//! Reference: Warren (2013), *Hacker's Delight*, 2nd ed., §8-2
//! "Multiword Multiplication".

/// A 128-bit unsigned integer as a pair of 64-bit halves.
///
/// Represents `hi·2^64 + lo`. Values are only constructed by
/// [`widen_multiply`], so a `Uint128` always equals the exact mathematical
/// product of its two 64-bit inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uint128 {
    /// High 64 bits of the product.
    pub hi: u64,
    /// Low 64 bits of the product.
    pub lo: u64,
}

/// Splits a 64-bit word into its high and low 32-bit halves.
#[inline]
fn split64(x: u64) -> (u64, u64) {
    (x >> 32, x & 0xFFFF_FFFF)
}

/// Multiplies two 64-bit integers keeping full 128-bit precision.
///
/// Never overflows and never loses bits: every pair of `u64` operands has a
/// product representable in 128 bits.
///
/// # Examples
/// ```
/// use u_sample::widemul::{widen_multiply, Uint128};
///
/// assert_eq!(widen_multiply(1, 1), Uint128 { hi: 0, lo: 1 });
/// assert_eq!(widen_multiply(2, 1 << 63), Uint128 { hi: 1, lo: 0 });
/// assert_eq!(
///     widen_multiply(u64::MAX, u64::MAX),
///     Uint128 { hi: u64::MAX - 1, lo: 1 },
/// );
/// ```
#[inline]
pub fn widen_multiply(x: u64, y: u64) -> Uint128 {
    let (x_hi, x_lo) = split64(x);
    let (y_hi, y_lo) = split64(y);

    let a = x_lo * y_lo;
    let b = x_hi * y_lo;
    let c = x_lo * y_hi;
    let d = x_hi * y_hi;

    let a_hi = a >> 32;
    let (b_hi, b_lo) = split64(b);
    let (c_hi, c_lo) = split64(c);

    // Middle column: a_hi + b_lo + c_lo is at most ~3·2^32, so its upper
    // bits are the carry into the high half.
    let carry = (a_hi + b_lo + c_lo) >> 32;

    // The wraps below are the same carry, absorbed by the 2^64 modulus of
    // the low half.
    let lo = a.wrapping_add(b_lo << 32).wrapping_add(c_lo << 32);
    let hi = d + b_hi + c_hi + carry;

    Uint128 { hi, lo }
}
