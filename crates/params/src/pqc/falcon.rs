//! Constants for the Falcon ring Z_q[X]/(X^n + 1), n = 2^logn

/// Falcon modulus
pub const FALCON_Q: u32 = 12_289;

/// Largest supported log-degree
pub const FALCON_MAX_LOGN: u32 = 10;

/// Largest supported degree
pub const FALCON_MAX_N: usize = 1 << FALCON_MAX_LOGN;

/// Primitive 2048-th root of unity modulo q
pub const FALCON_G: u32 = 7;

/// 2^16 mod q (Montgomery radix R)
pub const FALCON_R: u32 = 4091;

/// 2^32 mod q (R^2)
pub const FALCON_R2: u32 = 10_952;

/// -q^-1 mod 2^16
pub const FALCON_Q0I: u32 = 12_287;

/// Falcon degree parameter size for Falcon-512
pub const FALCON_512_LOGN: u32 = 9;

/// Falcon degree parameter size for Falcon-1024
pub const FALCON_1024_LOGN: u32 = 10;

/// Structure describing one Falcon parameter set as seen by the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FalconParameterSet {
    /// Canonical algorithm name
    pub name: &'static str,

    /// Base-2 logarithm of the ring degree
    pub logn: u32,

    /// Fixed-length (padded) signature encoding
    pub padded: bool,
}

impl FalconParameterSet {
    /// Ring degree n = 2^logn
    pub const fn degree(&self) -> usize {
        1 << self.logn
    }
}

/// Falcon-512 parameters (NIST security level 1)
pub const FALCON_512: FalconParameterSet = FalconParameterSet {
    name: "Falcon-512",
    logn: FALCON_512_LOGN,
    padded: false,
};

/// Falcon-1024 parameters (NIST security level 5)
pub const FALCON_1024: FalconParameterSet = FalconParameterSet {
    name: "Falcon-1024",
    logn: FALCON_1024_LOGN,
    padded: false,
};

/// Falcon-padded-512 parameters
pub const FALCON_PADDED_512: FalconParameterSet = FalconParameterSet {
    name: "Falcon-padded-512",
    logn: FALCON_512_LOGN,
    padded: true,
};

/// Falcon-padded-1024 parameters
pub const FALCON_PADDED_1024: FalconParameterSet = FalconParameterSet {
    name: "Falcon-padded-1024",
    logn: FALCON_1024_LOGN,
    padded: true,
};
