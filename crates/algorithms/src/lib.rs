//! Number-Theoretic Transform engines for lattice signature rings
//!
//! This crate provides the two transform families used by lattice-based
//! signature schemes:
//!
//! - **ML-DSA** over Z_q[X]/(X^256 + 1), q = 8380417, with signed 32-bit
//!   coefficients, Montgomery multiplication and deferred reduction.
//! - **Falcon** over Z_q[X]/(X^n + 1), q = 12289, n = 2^logn (1 <= logn <= 10),
//!   with unsigned 16-bit coefficients kept fully reduced.
//!
//! Twiddle tables are generated at compile time, so no runtime initialization
//! is required and every transform may be called concurrently on distinct
//! buffers. The library is usable in `no_std` environments; the
//! domain-tagged [`poly::polynomial::Polynomial`] wrapper requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod poly;

pub use poly::params::{FalconRing, MlDsaRing};
pub use poly::ntt::{falcon, ml_dsa};
