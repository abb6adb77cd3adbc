//! Generic polynomial transform engine
//!
//! This module provides the ring descriptors, compile-time twiddle tables,
//! scalar modular arithmetic and the forward/inverse transforms shared by
//! the ML-DSA and Falcon parameter sets.

pub mod ntt;
pub mod params;
#[cfg(feature = "alloc")]
pub mod polynomial;
pub mod reduce;
pub mod twiddle;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{
        inverse_canonical, try_inverse_canonical, try_ntt, InverseNttOperator, NttOperator,
    };
    pub use super::params::{Domain, FalconRing, MlDsaRing, Modulus, NttModulus};
    #[cfg(feature = "alloc")]
    pub use super::polynomial::{Canonical, DomainTag, Montgomery, NttForm, Polynomial};
    pub use super::reduce::{freeze, montgomery_reduce};
}
