//! Compiled-in constants for the pqntt transform engines
//!
//! Every value here is fixed per ring and never mutated at runtime. The
//! engines in `pqntt-algorithms` derive their twiddle tables from these
//! constants at compile time.

#![no_std]

pub mod pqc;
