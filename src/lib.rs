//! # pqntt
//!
//! Number-Theoretic Transforms for the ML-DSA and Falcon lattice signature
//! rings.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqntt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: the domain-tagged `Polynomial` type
//! - `sign` (default): per-parameter-set entry points, registry and self-test
//! - `serde`: serialize parameter-set identifiers
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqntt-api`]: error type and validation helpers
//! - [`pqntt-params`]: ring constants and parameter-set records
//! - [`pqntt-algorithms`]: the transform engines and the generic ring layer
//! - [`pqntt-sign`]: ML-DSA-44/65/87 and Falcon entry points

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqntt_algorithms as algorithms;
pub use pqntt_api as api;
pub use pqntt_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use pqntt_sign as sign;

/// Common imports for pqntt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Ring descriptors and the generic transform layer
    pub use crate::algorithms::poly::prelude::*;

    // Engines
    pub use crate::algorithms::{falcon, ml_dsa};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        ml_dsa_44, ml_dsa_65, ml_dsa_87, self_test, FalconVariant, MlDsaLevel, ParameterSet,
    };
}
