//! Error type definitions for block cipher operations

#[cfg(feature = "std")]
use thiserror::Error as ThisError;

/// Result type for speck operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for block cipher operations
#[cfg(feature = "std")]
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Unsupported (block size, key size) combination
    #[error("speck: invalid block size {block_size} and key size {key_size}")]
    InvalidSize {
        /// Requested block size in bytes
        block_size: usize,
        /// Supplied key size in bytes
        key_size: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the length check failed
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {reason}")]
    InvalidParameter {
        /// Name of the parameter
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Primary error type for block cipher operations (no_std version)
#[cfg(not(feature = "std"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Unsupported (block size, key size) combination
    InvalidSize {
        /// Requested block size in bytes
        block_size: usize,
        /// Supplied key size in bytes
        key_size: usize,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Where the length check failed
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Name of the parameter
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSize { block_size, key_size } => {
                write!(f, "speck: invalid block size {} and key size {}", block_size, key_size)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: {}", context, reason)
            },
        }
    }
}

impl Error {
    /// Replace the context of an error, keeping its payload
    ///
    /// Size errors carry no context and pass through unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            size @ Self::InvalidSize { .. } => size,
        }
    }

    /// Returns true for configuration errors raised while building a cipher
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::InvalidSize { .. })
    }
}
