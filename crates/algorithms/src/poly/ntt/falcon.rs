//! Falcon transform over Z_q[X]/(X^n + 1), q = 12289, n = 2^logn
//!
//! Coefficients are `u16` values kept in `[0, Q)` throughout. Twiddles are
//! read from the 1024-entry tables at index `m + i` for depth `m`, which
//! serves every `logn` in `1..=10` from the same tables.

use crate::poly::reduce::{mq_add, mq_montymul, mq_rshift1, mq_sub};
use crate::poly::twiddle::{FALCON_GM, FALCON_IGM};
use pqntt_params::pqc::falcon::{FALCON_MAX_LOGN, FALCON_R, FALCON_R2};

/// Forward NTT of the first `2^logn` coefficients of `a`, in place.
///
/// Inputs must be in `[0, Q)`; outputs are in `[0, Q)`, bit-reversed.
pub fn forward(a: &mut [u16], logn: u32) {
    debug_assert!((1..=FALCON_MAX_LOGN).contains(&logn));
    let n = 1usize << logn;
    debug_assert!(a.len() >= n);

    let mut t = n;
    let mut m = 1;
    while m < n {
        let ht = t >> 1;
        let mut j1 = 0;
        for i in 0..m {
            let s = FALCON_GM[m + i] as u32;
            for j in j1..j1 + ht {
                let u = a[j] as u32;
                let v = mq_montymul(a[j + ht] as u32, s);
                a[j] = mq_add(u, v) as u16;
                a[j + ht] = mq_sub(u, v) as u16;
            }
            j1 += t;
        }
        t = ht;
        m <<= 1;
    }
}

/// Inverse NTT of the first `2^logn` coefficients of `a`, in place,
/// including the division by `n`. Output is canonical.
pub fn inverse(a: &mut [u16], logn: u32) {
    debug_assert!((1..=FALCON_MAX_LOGN).contains(&logn));
    let n = 1usize << logn;
    debug_assert!(a.len() >= n);

    let mut t = 1;
    let mut m = n;
    while m > 1 {
        let hm = m >> 1;
        let dt = t << 1;
        let mut j1 = 0;
        for i in 0..hm {
            let s = FALCON_IGM[hm + i] as u32;
            for j in j1..j1 + t {
                let u = a[j] as u32;
                let v = a[j + t] as u32;
                a[j] = mq_add(u, v) as u16;
                a[j + t] = mq_montymul(mq_sub(u, v), s) as u16;
            }
            j1 += dt;
        }
        t = dt;
        m = hm;
    }

    // ni = R / n, so montymul(x, ni) = x / n
    let mut ni = FALCON_R;
    for _ in 0..logn {
        ni = mq_rshift1(ni);
    }
    for c in a[..n].iter_mut() {
        *c = mq_montymul(*c as u32, ni) as u16;
    }
}

/// Exact pointwise product `a_i <- a_i * b_i mod Q` of two NTT-domain
/// vectors of equal length.
pub fn pointwise(a: &mut [u16], b: &[u16]) {
    debug_assert_eq!(a.len(), b.len());
    for (a, &b) in a.iter_mut().zip(b.iter()) {
        *a = mq_montymul(mq_montymul(*a as u32, b as u32), FALCON_R2) as u16;
    }
}

/// Convert from Montgomery representation: `a_i <- a_i / 2^16 mod Q`.
pub fn from_montgomery(a: &mut [u16]) {
    for c in a.iter_mut() {
        *c = mq_montymul(*c as u32, 1) as u16;
    }
}

/// Convert into Montgomery representation: `a_i <- a_i * 2^16 mod Q`.
pub fn to_montgomery(a: &mut [u16]) {
    for c in a.iter_mut() {
        *c = mq_montymul(*c as u32, FALCON_R2) as u16;
    }
}
