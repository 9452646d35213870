//! Error handling for cipher primitives

use core::fmt;

use api::Error as CoreError;

/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key material of an unsupported size
    KeySize {
        /// Algorithm family that rejected the key
        algorithm: &'static str,
        /// Size of the rejected key in bytes
        actual: usize,
    },

    /// Processing error during a cipher operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::KeySize { algorithm, actual } => {
                write!(f, "Invalid {} key size: {} bytes (expected 16, 24 or 32)",
                    algorithm, actual)
            },
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to the API error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::KeySize { algorithm, actual } => CoreError::InvalidKey {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("unsupported key size of {} bytes", actual),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
