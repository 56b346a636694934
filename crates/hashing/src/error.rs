//! Error types for hashing and token generation.

use std::fmt;

use thiserror::Error;

/// Why a custom hash could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotConfiguredReason {
    /// `set_custom_hashing_method` was never called (or was cleared).
    FactoryMissing,
    /// The configured factory produced no algorithm.
    FactoryReturnedNone,
}

impl fmt::Display for NotConfiguredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactoryMissing => write!(f, "no custom hashing method has been set"),
            Self::FactoryReturnedNone => {
                write!(f, "custom hashing method did not produce an algorithm")
            }
        }
    }
}

/// Errors raised by [`crate::SecureHasher`] and [`crate::TokenGenerator`].
#[derive(Debug, Error)]
pub enum HashingError {
    /// A call argument or configuration value is out of range.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Name of the offending argument or config field.
        argument: String,
        /// What is wrong with it.
        message: String,
    },

    /// The custom hash path was used before it was configured.
    #[error("Custom hashing not configured: {reason}")]
    NotConfigured {
        /// Which configuration step is missing.
        reason: NotConfiguredReason,
    },

    /// Reading or rewinding an input stream failed.
    #[error("Stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Parser or I/O failure text.
        message: String,
    },
}

/// Result alias for hashing operations.
pub type HashingResult<T> = Result<T, HashingError>;

impl HashingError {
    /// Create an invalid argument error
    pub fn invalid_argument<A: Into<String>, M: Into<String>>(argument: A, message: M) -> Self {
        Self::InvalidArgument { argument: argument.into(), message: message.into() }
    }

    /// Create a not-configured error with the given reason
    pub fn not_configured(reason: NotConfiguredReason) -> Self {
        Self::NotConfigured { reason }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// True for [`HashingError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// True for [`HashingError::NotConfigured`], whatever the reason.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}
