//! Public error surface for the pqntt workspace
//!
//! The transform engines themselves are infallible: they operate on
//! caller-provided buffers under a documented precondition contract. The
//! types here are used by the checked entry points, the typed polynomial
//! constructors and the dispatch-layer self-test.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use error::validate;
