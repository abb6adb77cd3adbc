//! Error type definitions for checked transform operations

use alloc::string::String;

/// Primary error type for checked transform operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// A coefficient buffer does not have the length the ring requires
    #[cfg_attr(
        feature = "std",
        error("Invalid length for {context}: expected {expected}, got {actual}")
    )]
    InvalidLength {
        /// Operation that rejected the buffer
        context: &'static str,
        /// Required number of coefficients
        expected: usize,
        /// Number of coefficients supplied
        actual: usize,
    },

    /// A scalar argument (log-degree, coefficient value) is out of range
    #[cfg_attr(feature = "std", error("Invalid parameter in {context}: {message}"))]
    InvalidParameter {
        /// Operation that rejected the argument
        context: &'static str,
        /// What was wrong with it
        message: &'static str,
    },

    /// A parameter-set name did not resolve to a known configuration
    #[cfg_attr(feature = "std", error("Unknown parameter set: {name}"))]
    UnknownParameterSet {
        /// The name as supplied by the caller
        name: String,
    },

    /// A power-up self-test did not reproduce its expected answer
    #[cfg_attr(feature = "std", error("Self-test failed for {component}: {detail}"))]
    SelfTestFailed {
        /// Component under test
        component: &'static str,
        /// Description of the mismatch
        detail: String,
    },
}

/// Result type for checked transform operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: &'static str) -> Self {
        Error::InvalidParameter { context, message }
    }

    /// Replace the operation context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            other => other,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidLength { context, expected, actual } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            Error::UnknownParameterSet { name } => write!(f, "Unknown parameter set: {}", name),
            Error::SelfTestFailed { component, detail } => {
                write!(f, "Self-test failed for {}: {}", component, detail)
            }
        }
    }
}
