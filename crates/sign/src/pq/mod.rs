//! Post-quantum signature parameter sets and their transform entry points

pub mod falcon;
pub mod ml_dsa;

pub use falcon::FalconVariant;
pub use ml_dsa::{ml_dsa_44, ml_dsa_65, ml_dsa_87, MlDsaLevel, MlDsaPolynomial};
