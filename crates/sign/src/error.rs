//! Error handling for the dispatch layer
//!
//! Checked entry points report through the shared [`pqntt_api::Error`]. Each
//! rejection is logged at `debug` level with the operation that refused it.

pub use pqntt_api::error::validate;
pub use pqntt_api::{Error, Result, ResultExt};

/// Log a rejected checked call and hand the error back.
pub(crate) fn rejected(operation: &'static str, err: Error) -> Error {
    tracing::debug!(operation, error = %err, "rejected checked NTT call");
    err
}

/// Name the refusing operation on a validation result and log it.
pub(crate) fn check(operation: &'static str, result: Result<()>) -> Result<()> {
    result
        .with_context(operation)
        .map_err(|e| rejected(operation, e))
}
