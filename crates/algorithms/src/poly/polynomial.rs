//! polynomial.rs - Domain-tagged polynomial over a transform ring
//!
//! `Polynomial<R, D>` owns `2^logn` coefficients of ring `R` and records in
//! its type parameter `D` which representation they are in:
//!
//! ```text
//! Canonical --ntt--> NttForm --inverse--> Canonical
//!                    NttForm --inverse_to_montgomery--> Montgomery --reduce--> Canonical
//! ```
//!
//! Each transition consumes the value, so a Montgomery-scaled result cannot
//! be read as canonical, and the reduce-and-freeze step cannot run twice.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use super::ntt::{check_buffer, inverse_canonical, InverseNttOperator, NttOperator};
use super::params::{Domain, MlDsaRing, NttModulus};
use pqntt_api::error::validate;
use pqntt_api::Result;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

mod sealed {
    pub trait Sealed {}
}

/// Type-level domain marker
pub trait DomainTag: sealed::Sealed + Copy + Default + fmt::Debug + 'static {
    /// Runtime value of the marker
    const DOMAIN: Domain;
}

/// Time-domain coefficients in `[0, Q)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Canonical;

/// Bit-reversed NTT evaluations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NttForm;

/// Time-domain coefficients scaled by the ring's Montgomery radix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Montgomery;

impl sealed::Sealed for Canonical {}
impl sealed::Sealed for NttForm {}
impl sealed::Sealed for Montgomery {}

impl DomainTag for Canonical {
    const DOMAIN: Domain = Domain::Canonical;
}
impl DomainTag for NttForm {
    const DOMAIN: Domain = Domain::Ntt;
}
impl DomainTag for Montgomery {
    const DOMAIN: Domain = Domain::Montgomery;
}

/// A polynomial in `Z_Q[X]/(X^n + 1)` tagged with its representation
pub struct Polynomial<R: NttModulus, D: DomainTag = Canonical> {
    coeffs: Vec<R::Coeff>,
    logn: u32,
    _marker: PhantomData<(R, D)>,
}

impl<R: NttModulus, D: DomainTag> Polynomial<R, D> {
    fn from_parts(coeffs: Vec<R::Coeff>, logn: u32) -> Self {
        Self {
            coeffs,
            logn,
            _marker: PhantomData,
        }
    }

    fn retag<E: DomainTag>(self) -> Polynomial<R, E> {
        Polynomial::from_parts(self.coeffs, self.logn)
    }

    /// Base-2 logarithm of the degree
    pub fn logn(&self) -> u32 {
        self.logn
    }

    /// Number of coefficients
    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    /// Representation the coefficients are in
    pub fn domain(&self) -> Domain {
        D::DOMAIN
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[R::Coeff] {
        &self.coeffs
    }

    /// Consume the polynomial and return its coefficient vector
    pub fn into_coeffs(self) -> Vec<R::Coeff> {
        self.coeffs
    }
}

impl<R: NttModulus> Polynomial<R, Canonical> {
    /// Zero polynomial of degree `2^logn`
    pub fn zero(logn: u32) -> Result<Self> {
        validate::parameter(
            logn >= R::MIN_LOGN && logn <= R::MAX_LOGN,
            R::NAME,
            "log-degree outside the supported range",
        )?;
        Ok(Self::from_parts(vec![R::Coeff::default(); 1 << logn], logn))
    }

    /// Creates a polynomial from canonical coefficients.
    ///
    /// The length must be a supported power of two and every coefficient
    /// must lie in `[0, Q)`.
    pub fn from_coeffs(coeffs: &[R::Coeff]) -> Result<Self> {
        let logn = coeffs.len().trailing_zeros();
        check_buffer::<R>(R::NAME, coeffs.len(), logn)?;
        validate::parameter(
            coeffs
                .iter()
                .all(|&c| R::from_residue(R::residue(c)) == c),
            R::NAME,
            "coefficient outside [0, Q)",
        )?;
        Ok(Self::from_parts(coeffs.to_vec(), logn))
    }

    /// Creates a polynomial from arbitrary integers, reducing each one
    /// modulo Q.
    pub fn from_u32s(values: &[u32]) -> Result<Self> {
        let logn = values.len().trailing_zeros();
        check_buffer::<R>(R::NAME, values.len(), logn)?;
        let coeffs = values
            .iter()
            .map(|&v| R::from_residue(v % R::Q))
            .collect();
        Ok(Self::from_parts(coeffs, logn))
    }

    /// Schoolbook negacyclic product, O(n^2); reference for the NTT path
    pub fn schoolbook_mul(&self, other: &Self) -> Result<Self> {
        validate::length("schoolbook multiplication", other.degree(), self.degree())?;

        let n = self.degree();
        let q = R::Q as u64;
        let mut acc = vec![0u64; n];
        for (i, &a) in self.coeffs.iter().enumerate() {
            let a = R::residue(a) as u64;
            for (j, &b) in other.coeffs.iter().enumerate() {
                let p = a * R::residue(b) as u64 % q;
                let k = i + j;
                if k < n {
                    acc[k] = (acc[k] + p) % q;
                } else {
                    // X^n = -1
                    acc[k - n] = (acc[k - n] + q - p) % q;
                }
            }
        }

        let coeffs = acc.into_iter().map(|v| R::from_residue(v as u32)).collect();
        Ok(Self::from_parts(coeffs, self.logn))
    }
}

impl<R: NttOperator> Polynomial<R, Canonical> {
    /// Forward transform
    pub fn ntt(mut self) -> Polynomial<R, NttForm> {
        R::ntt(&mut self.coeffs, self.logn);
        self.retag()
    }

    /// Negacyclic product computed through the NTT
    pub fn ntt_mul(&self, other: &Self) -> Result<Self>
    where
        R: InverseNttOperator,
    {
        let a = self.clone().ntt();
        let b = other.clone().ntt();
        Ok(a.pointwise_mul(&b)?.inverse())
    }
}

impl<R: NttOperator> Polynomial<R, NttForm> {
    /// Exact pointwise product of two transformed polynomials
    pub fn pointwise_mul(&self, other: &Self) -> Result<Self> {
        validate::length("pointwise multiplication", other.degree(), self.degree())?;
        let mut out = self.clone();
        R::pointwise(&mut out.coeffs, &other.coeffs);
        Ok(out)
    }
}

impl<R: InverseNttOperator> Polynomial<R, NttForm> {
    /// Inverse transform with canonical output
    pub fn inverse(mut self) -> Polynomial<R, Canonical> {
        inverse_canonical::<R>(&mut self.coeffs, self.logn);
        self.retag()
    }
}

impl Polynomial<MlDsaRing, NttForm> {
    /// Inverse transform leaving the `2^32 mod Q` factor in place
    pub fn inverse_to_montgomery(mut self) -> Polynomial<MlDsaRing, Montgomery> {
        <MlDsaRing as InverseNttOperator>::inv_ntt(&mut self.coeffs, self.logn);
        self.retag()
    }
}

impl<R: InverseNttOperator> Polynomial<R, Montgomery> {
    /// Remove the Montgomery factor and freeze to `[0, Q)`
    pub fn reduce(mut self) -> Polynomial<R, Canonical> {
        R::from_montgomery(&mut self.coeffs);
        self.retag()
    }
}

// The ring and domain markers are zero-sized; only the buffer is cloned.
impl<R: NttModulus, D: DomainTag> Clone for Polynomial<R, D> {
    fn clone(&self) -> Self {
        Self::from_parts(self.coeffs.clone(), self.logn)
    }
}

impl<R: NttModulus, D: DomainTag> fmt::Debug for Polynomial<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("ring", &R::NAME)
            .field("domain", &D::DOMAIN)
            .field("logn", &self.logn)
            .field("coeffs", &self.coeffs)
            .finish()
    }
}

impl<R: NttModulus, D: DomainTag> ConstantTimeEq for Polynomial<R, D> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.coeffs.as_slice().ct_eq(other.coeffs.as_slice())
    }
}

impl<R: NttModulus, D: DomainTag> PartialEq for Polynomial<R, D> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<R: NttModulus, D: DomainTag> Eq for Polynomial<R, D> {}

impl<R: NttModulus, D: DomainTag> Zeroize for Polynomial<R, D> {
    fn zeroize(&mut self) {
        // keep the length; only the values are secret
        self.coeffs.iter_mut().for_each(Zeroize::zeroize);
    }
}
