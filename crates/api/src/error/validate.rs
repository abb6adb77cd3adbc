//! Validation utilities for checked transform entry points

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate a buffer length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a base-2 log-degree against `1..=max`
#[inline(always)]
pub fn log_degree(context: &'static str, logn: u32, max: u32) -> Result<()> {
    parameter(
        (1..=max).contains(&logn),
        context,
        "log-degree outside the supported range",
    )
}

/// Validate that a buffer is exactly `2^logn` coefficients long
#[inline(always)]
pub fn degree(context: &'static str, actual: usize, logn: u32, max: u32) -> Result<()> {
    log_degree(context, logn, max)?;
    length(context, actual, 1usize << logn)
}
