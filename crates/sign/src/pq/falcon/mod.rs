//! Falcon entry points
//!
//! All Falcon variants use the ring `Z_q[X]/(X^n + 1)` with q = 12289. The
//! named variants fix `n` to 512 or 1024; the free functions accept any
//! `logn` the engine supports.

use crate::error::{check, validate, Result};
use pqntt_algorithms::poly::ntt::{self, falcon as engine};
use pqntt_algorithms::FalconRing;
use pqntt_params::pqc::falcon::{
    FalconParameterSet, FALCON_1024, FALCON_1024_LOGN, FALCON_512, FALCON_512_LOGN,
    FALCON_PADDED_1024, FALCON_PADDED_512, FALCON_Q,
};

/// Falcon parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FalconVariant {
    /// Falcon-512
    Falcon512,
    /// Falcon-1024
    Falcon1024,
    /// Falcon-padded-512
    FalconPadded512,
    /// Falcon-padded-1024
    FalconPadded1024,
}

impl FalconVariant {
    /// Every variant
    pub const ALL: [FalconVariant; 4] = [
        Self::Falcon512,
        Self::Falcon1024,
        Self::FalconPadded512,
        Self::FalconPadded1024,
    ];

    /// Parameter record for this variant
    pub fn params(self) -> &'static FalconParameterSet {
        match self {
            Self::Falcon512 => &FALCON_512,
            Self::Falcon1024 => &FALCON_1024,
            Self::FalconPadded512 => &FALCON_PADDED_512,
            Self::FalconPadded1024 => &FALCON_PADDED_1024,
        }
    }

    /// Canonical name, e.g. `"Falcon-padded-512"`
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Base-2 logarithm of the degree
    pub fn logn(self) -> u32 {
        self.params().logn
    }

    /// Ring degree
    pub fn degree(self) -> usize {
        self.params().degree()
    }

    /// Whether the variant uses the fixed-length signature encoding
    pub fn is_padded(self) -> bool {
        self.params().padded
    }

    /// Forward NTT of a `degree()`-coefficient buffer
    #[inline]
    pub fn ntt(self, a: &mut [u16]) {
        ntt(a, self.logn());
    }

    /// Inverse NTT of a `degree()`-coefficient buffer, canonical output
    #[inline]
    pub fn intt(self, a: &mut [u16]) {
        intt(a, self.logn());
    }

    /// Checked [`ntt`](Self::ntt)
    pub fn try_ntt(self, a: &mut [u16]) -> Result<()> {
        try_ntt(a, self.logn())
    }

    /// Checked [`intt`](Self::intt)
    pub fn try_intt(self, a: &mut [u16]) -> Result<()> {
        try_intt(a, self.logn())
    }
}

/// Forward NTT in place over the first `2^logn` coefficients.
///
/// Coefficients must be in `[0, Q)`; outputs stay there.
#[inline]
pub fn ntt(a: &mut [u16], logn: u32) {
    engine::forward(a, logn);
}

/// Inverse NTT in place over the first `2^logn` coefficients, including
/// the division by `n`; output canonical.
#[inline]
pub fn intt(a: &mut [u16], logn: u32) {
    ntt::inverse_canonical::<FalconRing>(a, logn);
}

fn check_input(operation: &'static str, a: &[u16], logn: u32) -> Result<()> {
    check(
        operation,
        ntt::check_buffer::<FalconRing>(operation, a.len(), logn),
    )?;
    check(
        operation,
        validate::parameter(
            a.iter().all(|&c| (c as u32) < FALCON_Q),
            operation,
            "coefficient outside [0, Q)",
        ),
    )
}

fn check_named_logn(operation: &'static str, logn: u32) -> Result<()> {
    check(
        operation,
        validate::parameter(
            logn == FALCON_512_LOGN || logn == FALCON_1024_LOGN,
            operation,
            "log-degree must be 9 (Falcon-512) or 10 (Falcon-1024)",
        ),
    )
}

/// Checked forward NTT for the named degrees (`logn` 9 or 10)
pub fn try_ntt(a: &mut [u16], logn: u32) -> Result<()> {
    check_named_logn("Falcon forward NTT", logn)?;
    try_ntt_with_logn(a, logn)
}

/// Checked inverse NTT for the named degrees (`logn` 9 or 10)
pub fn try_intt(a: &mut [u16], logn: u32) -> Result<()> {
    check_named_logn("Falcon inverse NTT", logn)?;
    try_intt_with_logn(a, logn)
}

/// Checked forward NTT for any `logn` in `1..=10`
pub fn try_ntt_with_logn(a: &mut [u16], logn: u32) -> Result<()> {
    check_input("Falcon forward NTT", a, logn)?;
    ntt(a, logn);
    Ok(())
}

/// Checked inverse NTT for any `logn` in `1..=10`
pub fn try_intt_with_logn(a: &mut [u16], logn: u32) -> Result<()> {
    check_input("Falcon inverse NTT", a, logn)?;
    intt(a, logn);
    Ok(())
}
