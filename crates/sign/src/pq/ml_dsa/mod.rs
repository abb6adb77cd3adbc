//! ML-DSA entry points
//!
//! ML-DSA-44, ML-DSA-65 and ML-DSA-87 share the ring `Z_q[X]/(X^256 + 1)`,
//! q = 8380417, so every level resolves to the same engine. The per-level
//! namespaces exist so that callers can name the parameter set they are
//! working under.

use crate::error::{check, validate, Result};
use pqntt_algorithms::poly::ntt::{self, ml_dsa as engine};
use pqntt_algorithms::MlDsaRing;
use pqntt_params::pqc::ml_dsa::{MlDsaParameterSet, ML_DSA_44, ML_DSA_65, ML_DSA_87, ML_DSA_N};

/// ML-DSA polynomial: 256 signed coefficients
pub type MlDsaPolynomial = [i32; ML_DSA_N];

const LOGN: u32 = 8;

/// ML-DSA security levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MlDsaLevel {
    /// ML-DSA-44 (NIST category 2)
    MlDsa44,
    /// ML-DSA-65 (NIST category 3)
    MlDsa65,
    /// ML-DSA-87 (NIST category 5)
    MlDsa87,
}

impl MlDsaLevel {
    /// Every level, in increasing strength
    pub const ALL: [MlDsaLevel; 3] = [Self::MlDsa44, Self::MlDsa65, Self::MlDsa87];

    /// Parameter record for this level
    pub fn params(self) -> &'static MlDsaParameterSet {
        match self {
            Self::MlDsa44 => &ML_DSA_44,
            Self::MlDsa65 => &ML_DSA_65,
            Self::MlDsa87 => &ML_DSA_87,
        }
    }

    /// Canonical name, e.g. `"ML-DSA-65"`
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Forward NTT
    #[inline]
    pub fn ntt(self, a: &mut MlDsaPolynomial) {
        forward(a);
    }

    /// Inverse NTT, Montgomery-scaled output
    #[inline]
    pub fn invntt_tomont(self, a: &mut MlDsaPolynomial) {
        inverse_to_montgomery(a);
    }

    /// Inverse NTT, canonical output
    #[inline]
    pub fn invntt(self, a: &mut MlDsaPolynomial) {
        inverse(a);
    }

    /// Checked forward NTT
    pub fn try_ntt(self, a: &mut [i32]) -> Result<()> {
        try_forward(a)
    }

    /// Checked inverse NTT, Montgomery-scaled output
    pub fn try_invntt_tomont(self, a: &mut [i32]) -> Result<()> {
        try_inverse_to_montgomery(a)
    }

    /// Checked inverse NTT, canonical output
    pub fn try_invntt(self, a: &mut [i32]) -> Result<()> {
        try_inverse(a)
    }
}

#[inline(always)]
fn forward(a: &mut MlDsaPolynomial) {
    engine::forward(a);
}

#[inline(always)]
fn inverse_to_montgomery(a: &mut MlDsaPolynomial) {
    engine::inverse_to_montgomery(a);
}

#[inline(always)]
fn inverse(a: &mut MlDsaPolynomial) {
    ntt::inverse_canonical::<MlDsaRing>(a, LOGN);
}

fn check_coefficients(operation: &'static str, a: &[i32], bound: i32) -> Result<()> {
    check(
        operation,
        ntt::check_buffer::<MlDsaRing>(operation, a.len(), LOGN),
    )?;
    check(
        operation,
        validate::parameter(
            a.iter().all(|c| (-bound..=bound).contains(c)),
            operation,
            "coefficient magnitude exceeds the transform input bound",
        ),
    )
}

fn try_forward(a: &mut [i32]) -> Result<()> {
    check_coefficients("ML-DSA forward NTT", a, engine::FORWARD_INPUT_BOUND)?;
    ntt::try_ntt::<MlDsaRing>(a, LOGN)
}

fn try_inverse_to_montgomery(a: &mut [i32]) -> Result<()> {
    check_coefficients("ML-DSA inverse NTT", a, engine::INVERSE_INPUT_BOUND)?;
    ntt::try_inv_ntt::<MlDsaRing>(a, LOGN)
}

fn try_inverse(a: &mut [i32]) -> Result<()> {
    check_coefficients("ML-DSA inverse NTT", a, engine::INVERSE_INPUT_BOUND)?;
    ntt::try_inverse_canonical::<MlDsaRing>(a, LOGN)
}

macro_rules! ml_dsa_level {
    ($module:ident, $level:ident, $name:literal) => {
        #[doc = concat!("NTT entry points for ", $name)]
        pub mod $module {
            use super::{MlDsaLevel, MlDsaPolynomial};
            use crate::error::Result;

            /// Level this namespace is bound to
            pub const LEVEL: MlDsaLevel = MlDsaLevel::$level;

            /// Forward NTT in place; output bit-reversed, not reduced
            #[inline]
            pub fn ntt(a: &mut MlDsaPolynomial) {
                super::forward(a);
            }

            /// Inverse NTT in place; output multiplied by `2^32 mod Q`
            #[inline]
            pub fn invntt_tomont(a: &mut MlDsaPolynomial) {
                super::inverse_to_montgomery(a);
            }

            /// Inverse NTT in place; output canonical in `[0, Q)`
            #[inline]
            pub fn invntt(a: &mut MlDsaPolynomial) {
                super::inverse(a);
            }

            /// Checked [`ntt`]
            pub fn try_ntt(a: &mut [i32]) -> Result<()> {
                super::try_forward(a)
            }

            /// Checked [`invntt_tomont`]
            pub fn try_invntt_tomont(a: &mut [i32]) -> Result<()> {
                super::try_inverse_to_montgomery(a)
            }

            /// Checked [`invntt`]
            pub fn try_invntt(a: &mut [i32]) -> Result<()> {
                super::try_inverse(a)
            }
        }
    };
}

ml_dsa_level!(ml_dsa_44, MlDsa44, "ML-DSA-44");
ml_dsa_level!(ml_dsa_65, MlDsa65, "ML-DSA-65");
ml_dsa_level!(ml_dsa_87, MlDsa87, "ML-DSA-87");
