//! Error handling for the transform ecosystem

pub mod types;
pub mod validate;

mod traits;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;
