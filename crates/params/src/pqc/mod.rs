//! Constants for post-quantum signature rings

pub mod falcon;
pub mod ml_dsa;
