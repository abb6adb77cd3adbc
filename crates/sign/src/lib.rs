//! Per-parameter-set NTT entry points
//!
//! This crate exposes the transform engines of `pqntt-algorithms` under the
//! names of the signature parameter sets that use them:
//!
//! - [`ml_dsa_44`], [`ml_dsa_65`], [`ml_dsa_87`]: `ntt`, `invntt_tomont`
//!   and `invntt` on `[i32; 256]`. All three share one engine.
//! - [`falcon`]: `ntt` / `intt` on `[u16]` of length `2^logn`, plus the
//!   [`FalconVariant`] records for Falcon-512, Falcon-1024 and their padded
//!   forms.
//!
//! The unchecked functions never fail and never log. The `try_` variants
//! validate their inputs and return [`Result`]. Named configurations can be
//! looked up at runtime with [`ParameterSet::from_name`], and
//! [`self_test`] runs a set of known-answer checks over both engines.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod pq;
pub mod registry;

pub use error::{Error, Result};
pub use pq::falcon::{self, FalconVariant};
pub use pq::ml_dsa::{ml_dsa_44, ml_dsa_65, ml_dsa_87, MlDsaLevel};
pub use registry::ParameterSet;
pub use self_test::{self_test, self_tests_passed};
