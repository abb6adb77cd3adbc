//! twiddle.rs - Compile-time twiddle factor tables
//!
//! Every table is a `static` produced by a `const fn`, so the values are
//! baked into the binary and never initialised at runtime. Entries are
//! stored in bit-reversed order and pre-multiplied by the Montgomery radix
//! of their ring.

use pqntt_params::pqc::falcon::{FALCON_G, FALCON_MAX_N, FALCON_Q, FALCON_R};
use pqntt_params::pqc::ml_dsa::{ML_DSA_N, ML_DSA_Q, ML_DSA_ROOT_OF_UNITY};

/// Bit-reverse the low `bits` bits of `x`.
pub const fn bit_reverse(x: usize, bits: u32) -> usize {
    let mut r = 0;
    let mut i = 0;
    while i < bits {
        r |= ((x >> i) & 1) << (bits - 1 - i);
        i += 1;
    }
    r
}

const fn pow_mod(mut base: u64, mut exp: u64, q: u64) -> u64 {
    let mut acc = 1u64;
    base %= q;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = acc * base % q;
        }
        base = base * base % q;
        exp >>= 1;
    }
    acc
}

const fn ml_dsa_zetas() -> [i32; ML_DSA_N] {
    let q = ML_DSA_Q as u64;
    let mont = (1u64 << 32) % q;

    let mut powers = [0u64; ML_DSA_N];
    powers[0] = 1;
    let mut i = 1;
    while i < ML_DSA_N {
        powers[i] = powers[i - 1] * ML_DSA_ROOT_OF_UNITY as u64 % q;
        i += 1;
    }

    let mut out = [0i32; ML_DSA_N];
    // index 0 is never read by the transforms
    let mut k = 1;
    while k < ML_DSA_N {
        let v = mont * powers[bit_reverse(k, 8)] % q;
        out[k] = if v > q / 2 {
            v as i32 - q as i32
        } else {
            v as i32
        };
        k += 1;
    }
    out
}

const fn falcon_table(root: u32) -> [u16; FALCON_MAX_N] {
    let q = FALCON_Q as u64;

    let mut powers = [0u64; FALCON_MAX_N];
    powers[0] = 1;
    let mut i = 1;
    while i < FALCON_MAX_N {
        powers[i] = powers[i - 1] * root as u64 % q;
        i += 1;
    }

    let mut out = [0u16; FALCON_MAX_N];
    let mut u = 0;
    while u < FALCON_MAX_N {
        out[u] = (FALCON_R as u64 * powers[bit_reverse(u, 10)] % q) as u16;
        u += 1;
    }
    out
}

/// Inverse of the Falcon generator modulo Q.
pub const FALCON_G_INV: u32 = pow_mod(FALCON_G as u64, FALCON_Q as u64 - 2, FALCON_Q as u64) as u32;

/// ML-DSA twiddles: `ZETAS[k] = 2^32 * 1753^brv8(k) mod Q`, centred in
/// `(-Q/2, Q/2]`.
pub static ML_DSA_ZETAS: [i32; ML_DSA_N] = ml_dsa_zetas();

/// Falcon forward twiddles: `GM[u] = R * g^brv10(u) mod Q`.
pub static FALCON_GM: [u16; FALCON_MAX_N] = falcon_table(FALCON_G);

/// Falcon inverse twiddles: `IGM[u] = R * g^-brv10(u) mod Q`.
pub static FALCON_IGM: [u16; FALCON_MAX_N] = falcon_table(FALCON_G_INV);
