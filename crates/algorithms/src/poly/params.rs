//! params.rs - Ring descriptors for the transform engines

use core::fmt::Debug;
use pqntt_params::pqc::falcon::{FALCON_G, FALCON_MAX_LOGN, FALCON_Q, FALCON_R};
use pqntt_params::pqc::ml_dsa::{ML_DSA_MONT, ML_DSA_Q, ML_DSA_ROOT_OF_UNITY};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Representation a coefficient buffer is currently in.
///
/// The raw buffer functions do not track this; it is part of each
/// function's contract and is enforced by the types in
/// [`polynomial`](super::polynomial) when `alloc` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Time-domain coefficients, each in `[0, Q)`
    Canonical,
    /// Time-domain coefficients scaled by the Montgomery radix
    Montgomery,
    /// Bit-reversed evaluations produced by a forward transform
    Ntt,
}

/// Basic trait defining the modulus and degree range of a polynomial ring
pub trait Modulus {
    /// The prime modulus Q for coefficient arithmetic
    const Q: u32;

    /// Smallest log-degree the engine accepts
    const MIN_LOGN: u32;

    /// Largest log-degree the engine accepts (the twiddle tables are sized for it)
    const MAX_LOGN: u32;

    /// Largest polynomial degree
    const MAX_N: usize = 1 << Self::MAX_LOGN;
}

/// Extended trait for NTT-enabled rings
pub trait NttModulus: Modulus + Sized + 'static {
    /// Storage type of a single coefficient
    type Coeff: Copy
        + Default
        + Eq
        + Debug
        + Zeroize
        + ConstantTimeEq
        + Send
        + Sync
        + 'static;

    /// Human-readable ring name used in error contexts
    const NAME: &'static str;

    /// Primitive 2^(MAX_LOGN + 1)-th root of unity
    const ROOT: u32;

    /// Montgomery radix reduced modulo Q
    const MONT_R: u32;

    /// Domain produced by the inverse transform
    const INVERSE_OUTPUT: Domain;

    /// Coefficient holding the residue `v`, which must be below `Q`
    fn from_residue(v: u32) -> Self::Coeff;

    /// Canonical residue in `[0, Q)` of any coefficient representative
    fn residue(c: Self::Coeff) -> u32;
}

/// ML-DSA ring: Q = 8380417, N = 256, R = 2^32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MlDsaRing;

impl Modulus for MlDsaRing {
    const Q: u32 = ML_DSA_Q;
    const MIN_LOGN: u32 = 8;
    const MAX_LOGN: u32 = 8;
}

impl NttModulus for MlDsaRing {
    type Coeff = i32;

    const NAME: &'static str = "ML-DSA";
    const ROOT: u32 = ML_DSA_ROOT_OF_UNITY;
    const MONT_R: u32 = (ML_DSA_MONT + ML_DSA_Q as i32) as u32;
    const INVERSE_OUTPUT: Domain = Domain::Montgomery;

    #[inline(always)]
    fn from_residue(v: u32) -> i32 {
        v as i32
    }

    #[inline(always)]
    fn residue(c: i32) -> u32 {
        c.rem_euclid(ML_DSA_Q as i32) as u32
    }
}

/// Falcon ring: Q = 12289, N = 2^logn for 1 <= logn <= 10, R = 2^16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FalconRing;

impl Modulus for FalconRing {
    const Q: u32 = FALCON_Q;
    const MIN_LOGN: u32 = 1;
    const MAX_LOGN: u32 = FALCON_MAX_LOGN;
}

impl NttModulus for FalconRing {
    type Coeff = u16;

    const NAME: &'static str = "Falcon";
    const ROOT: u32 = FALCON_G;
    const MONT_R: u32 = FALCON_R;
    const INVERSE_OUTPUT: Domain = Domain::Canonical;

    #[inline(always)]
    fn from_residue(v: u32) -> u16 {
        v as u16
    }

    #[inline(always)]
    fn residue(c: u16) -> u32 {
        c as u32 % FALCON_Q
    }
}
