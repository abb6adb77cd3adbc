//! reduce.rs - Scalar modular arithmetic for both rings
//!
//! ## ML-DSA (signed, R = 2^32)
//! Coefficients are `i32` representatives that are allowed to drift out of
//! `[0, Q)` between reductions. [`montgomery_reduce`] maps a 64-bit product
//! back into `(-Q, Q)`, [`reduce32`] folds any `i32` into roughly
//! `[-6283009, 6283008]`, and [`freeze`] produces the canonical residue.
//!
//! ## Falcon (unsigned, R = 2^16)
//! Coefficients are kept fully reduced in `[0, Q)` at all times. All helpers
//! are branch-free; the conditional correction is a mask derived from the
//! sign bit of a wrapping difference.

use pqntt_params::pqc::falcon::{FALCON_Q, FALCON_Q0I};
use pqntt_params::pqc::ml_dsa::{ML_DSA_QINV, ML_DSA_Q_I32};

// ---------------------------------------------------------------------------
// ML-DSA
// ---------------------------------------------------------------------------

/// Montgomery reduction: for -2^31 * Q <= a < 2^31 * Q returns
/// r = a * 2^-32 mod Q
/// with -Q < r < Q.
#[inline(always)]
pub fn montgomery_reduce(a: i64) -> i32 {
    let t = (a as i32).wrapping_mul(ML_DSA_QINV);
    ((a - (t as i64) * (ML_DSA_Q_I32 as i64)) >> 32) as i32
}

/// Reduction for any `a` with a <= 2^31 - 2^22 - 1; the result r satisfies
/// r = a mod Q and -6283009 <= r <= 6283008.
#[inline(always)]
pub fn reduce32(a: i32) -> i32 {
    let t = (a + (1 << 22)) >> 23;
    a - t * ML_DSA_Q_I32
}

/// Adds Q if the input is negative (branch-free).
#[inline(always)]
pub fn caddq(a: i32) -> i32 {
    a + ((a >> 31) & ML_DSA_Q_I32)
}

/// Canonical representative in `[0, Q)`.
#[inline(always)]
pub fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}

// ---------------------------------------------------------------------------
// Falcon
// ---------------------------------------------------------------------------

/// Addition modulo Q. Operands must be in `[0, Q)`.
#[inline(always)]
pub fn mq_add(x: u32, y: u32) -> u32 {
    let mut d = x.wrapping_add(y).wrapping_sub(FALCON_Q);
    d = d.wrapping_add(FALCON_Q & (d >> 31).wrapping_neg());
    d
}

/// Subtraction modulo Q. Operands must be in `[0, Q)`.
#[inline(always)]
pub fn mq_sub(x: u32, y: u32) -> u32 {
    let mut d = x.wrapping_sub(y);
    d = d.wrapping_add(FALCON_Q & (d >> 31).wrapping_neg());
    d
}

/// Halving modulo Q.
#[inline(always)]
pub fn mq_rshift1(mut x: u32) -> u32 {
    x = x.wrapping_add(FALCON_Q & (x & 1).wrapping_neg());
    x >> 1
}

/// Montgomery multiplication: x * y / 2^16 mod Q, result in `[0, Q)`.
#[inline(always)]
pub fn mq_montymul(x: u32, y: u32) -> u32 {
    let mut z = x.wrapping_mul(y);
    let w = (z.wrapping_mul(FALCON_Q0I) & 0xFFFF).wrapping_mul(FALCON_Q);
    // z + w is divisible by 2^16 and below 2^31 for reduced inputs
    z = (z.wrapping_add(w)) >> 16;
    z = z.wrapping_sub(FALCON_Q);
    z = z.wrapping_add(FALCON_Q & (z >> 31).wrapping_neg());
    z
}
