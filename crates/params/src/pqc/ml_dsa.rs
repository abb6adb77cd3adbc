//! Constants for the ML-DSA ring Z_q[X]/(X^256 + 1)
//!
//! All three ML-DSA security levels share this ring; they differ only in
//! module dimensions, which the transform never sees.

/// Polynomial degree
pub const ML_DSA_N: usize = 256;

/// Prime modulus q = 2^23 - 2^13 + 1
pub const ML_DSA_Q: u32 = 8_380_417;

/// `ML_DSA_Q` as a signed coefficient
pub const ML_DSA_Q_I32: i32 = ML_DSA_Q as i32;

/// Primitive 512-th root of unity modulo q
pub const ML_DSA_ROOT_OF_UNITY: u32 = 1753;

/// 2^32 mod q, centred
pub const ML_DSA_MONT: i32 = -4_186_625;

/// q^-1 mod 2^32
pub const ML_DSA_QINV: i32 = 58_728_449;

/// 2^64 mod q, the Montgomery form of R
pub const ML_DSA_MONT_SQ: i32 = 2_365_951;

/// MONT^2 / 256 mod q: scale applied by the last inverse layer
pub const ML_DSA_INV_NTT_SCALE: i32 = 41_978;

/// Structure describing one ML-DSA parameter set as seen by the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlDsaParameterSet {
    /// Canonical algorithm name
    pub name: &'static str,

    /// NIST security category
    pub category: u8,

    /// Rows of the public matrix A
    pub k: usize,

    /// Columns of the public matrix A
    pub l: usize,
}

/// ML-DSA-44 (NIST security category 2)
pub const ML_DSA_44: MlDsaParameterSet = MlDsaParameterSet {
    name: "ML-DSA-44",
    category: 2,
    k: 4,
    l: 4,
};

/// ML-DSA-65 (NIST security category 3)
pub const ML_DSA_65: MlDsaParameterSet = MlDsaParameterSet {
    name: "ML-DSA-65",
    category: 3,
    k: 6,
    l: 5,
};

/// ML-DSA-87 (NIST security category 5)
pub const ML_DSA_87: MlDsaParameterSet = MlDsaParameterSet {
    name: "ML-DSA-87",
    category: 5,
    k: 8,
    l: 7,
};
