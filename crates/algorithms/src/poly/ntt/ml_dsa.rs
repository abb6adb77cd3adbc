//! ML-DSA transform over Z_q[X]/(X^256 + 1), q = 8380417
//!
//! Signed 32-bit coefficients with deferred reduction: the forward
//! transform never reduces after its additions, so every layer grows the
//! coefficient bound by less than Q. Starting from `|a_i| < Q` the output
//! satisfies `|a_i| < 9Q`; in general an input bound `B` yields `B + 8Q`,
//! which must stay below 2^31.
//!
//! Output of [`forward`] is in bit-reversed order. [`inverse_to_montgomery`]
//! accepts that order and returns coefficients scaled by `2^32 mod Q`.

use crate::poly::reduce::{freeze, montgomery_reduce, reduce32};
use crate::poly::twiddle::ML_DSA_ZETAS;
use pqntt_params::pqc::ml_dsa::{ML_DSA_INV_NTT_SCALE, ML_DSA_MONT_SQ, ML_DSA_N, ML_DSA_Q_I32};

/// Number of coefficients in an ML-DSA polynomial
pub const N: usize = ML_DSA_N;

/// Largest `|a_i|` accepted by [`forward`]: eight layers of growth must
/// stay inside `i32`.
pub const FORWARD_INPUT_BOUND: i32 = i32::MAX - 8 * ML_DSA_Q_I32;

/// Largest `|a_i|` accepted by [`inverse_to_montgomery`].
pub const INVERSE_INPUT_BOUND: i32 = i32::MAX - (1 << 22);

/// Forward NTT, in place. No modular reduction is performed after the
/// additions and subtractions, so inputs must satisfy
/// `|a_i| <= FORWARD_INPUT_BOUND`.
#[inline]
pub fn forward(a: &mut [i32; N]) {
    forward_slice(a);
}

/// Inverse NTT, in place, with output multiplied by the Montgomery factor
/// `2^32 mod Q`. Inputs may be any `i32` with
/// `|a_i| <= INVERSE_INPUT_BOUND`; outputs satisfy `|a_i| < Q`.
#[inline]
pub fn inverse_to_montgomery(a: &mut [i32; N]) {
    inverse_to_montgomery_slice(a);
}

/// Inverse NTT followed by removal of the Montgomery factor; every output
/// coefficient is the canonical residue in `[0, Q)`.
#[inline]
pub fn inverse_canonical(a: &mut [i32; N]) {
    inverse_to_montgomery_slice(a);
    from_montgomery_slice(a);
}

/// Strip the Montgomery factor and freeze: `a_i <- freeze(a_i * 2^-32)`.
#[inline]
pub fn from_montgomery(a: &mut [i32; N]) {
    from_montgomery_slice(a);
}

/// Pointwise Montgomery product `c_i = a_i * b_i * 2^-32 mod Q`.
///
/// Feeding the result to [`inverse_to_montgomery`] cancels the `2^-32`, so
/// its output, once frozen, is the negacyclic product.
/// Each `|a_i * b_i|` must stay below `2^31 * Q`, which holds for outputs
/// of [`forward`] on inputs below Q.
pub fn pointwise_montgomery(c: &mut [i32; N], a: &[i32; N], b: &[i32; N]) {
    for ((c, &a), &b) in c.iter_mut().zip(a.iter()).zip(b.iter()) {
        *c = montgomery_reduce(a as i64 * b as i64);
    }
}

/// Exact pointwise product `a_i <- a_i * b_i mod Q`, in place.
///
/// The result is the NTT of the product without any radix scaling.
#[inline]
pub fn pointwise(a: &mut [i32; N], b: &[i32; N]) {
    pointwise_slice(a, b);
}

pub(crate) fn forward_slice(a: &mut [i32]) {
    debug_assert_eq!(a.len(), N);

    let mut k = 0;
    let mut len = N / 2;
    while len > 0 {
        let mut start = 0;
        while start < N {
            k += 1;
            let zeta = ML_DSA_ZETAS[k] as i64;
            for j in start..start + len {
                let t = montgomery_reduce(zeta * a[j + len] as i64);
                a[j + len] = a[j] - t;
                a[j] += t;
            }
            start += len << 1;
        }
        len >>= 1;
    }
}

pub(crate) fn inverse_to_montgomery_slice(a: &mut [i32]) {
    debug_assert_eq!(a.len(), N);

    // bring every input into roughly (-0.75Q, 0.75Q) so the unreduced
    // sum path stays below 256 * 0.75Q < 2^31
    for c in a.iter_mut() {
        *c = reduce32(*c);
    }

    let mut k = N;
    let mut len = 1;
    while len < N {
        let mut start = 0;
        while start < N {
            k -= 1;
            let zeta = -(ML_DSA_ZETAS[k] as i64);
            for j in start..start + len {
                let t = a[j];
                a[j] = t + a[j + len];
                a[j + len] = montgomery_reduce(zeta * (t - a[j + len]) as i64);
            }
            start += len << 1;
        }
        len <<= 1;
    }

    let f = ML_DSA_INV_NTT_SCALE as i64;
    for c in a.iter_mut() {
        *c = montgomery_reduce(f * *c as i64);
    }
}

pub(crate) fn from_montgomery_slice(a: &mut [i32]) {
    for c in a.iter_mut() {
        *c = freeze(montgomery_reduce(*c as i64));
    }
}

pub(crate) fn pointwise_slice(a: &mut [i32], b: &[i32]) {
    debug_assert_eq!(a.len(), b.len());

    let r2 = ML_DSA_MONT_SQ as i64;
    for (a, &b) in a.iter_mut().zip(b.iter()) {
        let ab = montgomery_reduce(*a as i64 * b as i64);
        *a = montgomery_reduce(ab as i64 * r2);
    }
}
