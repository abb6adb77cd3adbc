//! ntt.rs - Number Theoretic Transform dispatch over ring descriptors
//!
//! The two engines live in [`ml_dsa`] and [`falcon`]. This module ties them
//! to the ring descriptors through [`NttOperator`] and
//! [`InverseNttOperator`], so code written against a generic ring (the
//! typed [`Polynomial`](super::polynomial::Polynomial), the dispatch layer)
//! runs unchanged on either.
//!
//! ## Domains
//! - Forward: `Canonical -> Ntt` (bit-reversed order)
//! - Inverse: `Ntt -> R::INVERSE_OUTPUT`
//! - [`inverse_canonical`]: `Ntt -> Canonical` for every ring; the
//!   Montgomery-factor removal runs exactly once, and only for rings whose
//!   inverse leaves it in place.
//!
//! The unchecked functions carry a precondition contract and never fail.
//! The `try_` variants validate the log-degree and buffer length first.

use super::params::{Domain, FalconRing, MlDsaRing, Modulus, NttModulus};
use pqntt_api::error::validate;
use pqntt_api::Result;

pub mod falcon;
pub mod ml_dsa;

/// Forward transform and NTT-domain arithmetic for a ring
pub trait NttOperator: NttModulus {
    /// Forward NTT of `2^logn` coefficients, in place
    fn ntt(coeffs: &mut [Self::Coeff], logn: u32);

    /// Exact pointwise product of two NTT-domain vectors, written into `a`
    fn pointwise(a: &mut [Self::Coeff], b: &[Self::Coeff]);
}

/// Inverse transform for a ring
pub trait InverseNttOperator: NttModulus {
    /// Inverse NTT of `2^logn` coefficients, in place; the output is in
    /// `Self::INVERSE_OUTPUT`
    fn inv_ntt(coeffs: &mut [Self::Coeff], logn: u32);

    /// Map Montgomery-scaled coefficients to canonical residues
    fn from_montgomery(coeffs: &mut [Self::Coeff]);
}

impl NttOperator for MlDsaRing {
    #[inline]
    fn ntt(coeffs: &mut [i32], _logn: u32) {
        ml_dsa::forward_slice(coeffs);
    }

    #[inline]
    fn pointwise(a: &mut [i32], b: &[i32]) {
        ml_dsa::pointwise_slice(a, b);
    }
}

impl InverseNttOperator for MlDsaRing {
    #[inline]
    fn inv_ntt(coeffs: &mut [i32], _logn: u32) {
        ml_dsa::inverse_to_montgomery_slice(coeffs);
    }

    #[inline]
    fn from_montgomery(coeffs: &mut [i32]) {
        ml_dsa::from_montgomery_slice(coeffs);
    }
}

impl NttOperator for FalconRing {
    #[inline]
    fn ntt(coeffs: &mut [u16], logn: u32) {
        falcon::forward(coeffs, logn);
    }

    #[inline]
    fn pointwise(a: &mut [u16], b: &[u16]) {
        falcon::pointwise(a, b);
    }
}

impl InverseNttOperator for FalconRing {
    #[inline]
    fn inv_ntt(coeffs: &mut [u16], logn: u32) {
        falcon::inverse(coeffs, logn);
    }

    #[inline]
    fn from_montgomery(coeffs: &mut [u16]) {
        falcon::from_montgomery(coeffs);
    }
}

/// Inverse NTT with canonical output for any ring.
pub fn inverse_canonical<R: InverseNttOperator>(coeffs: &mut [R::Coeff], logn: u32) {
    R::inv_ntt(coeffs, logn);
    if R::INVERSE_OUTPUT == Domain::Montgomery {
        R::from_montgomery(coeffs);
    }
}

/// Check that `logn` is supported by the ring and that the buffer holds
/// exactly `2^logn` coefficients.
pub fn check_buffer<R: Modulus>(context: &'static str, len: usize, logn: u32) -> Result<()> {
    validate::parameter(
        logn >= R::MIN_LOGN,
        context,
        "log-degree below the ring minimum",
    )?;
    validate::degree(context, len, logn, R::MAX_LOGN)
}

/// Checked forward NTT
pub fn try_ntt<R: NttOperator>(coeffs: &mut [R::Coeff], logn: u32) -> Result<()> {
    check_buffer::<R>("forward NTT", coeffs.len(), logn)?;
    R::ntt(coeffs, logn);
    Ok(())
}

/// Checked inverse NTT; output in `R::INVERSE_OUTPUT`
pub fn try_inv_ntt<R: InverseNttOperator>(coeffs: &mut [R::Coeff], logn: u32) -> Result<()> {
    check_buffer::<R>("inverse NTT", coeffs.len(), logn)?;
    R::inv_ntt(coeffs, logn);
    Ok(())
}

/// Checked inverse NTT with canonical output
pub fn try_inverse_canonical<R: InverseNttOperator>(
    coeffs: &mut [R::Coeff],
    logn: u32,
) -> Result<()> {
    check_buffer::<R>("inverse NTT", coeffs.len(), logn)?;
    inverse_canonical::<R>(coeffs, logn);
    Ok(())
}
