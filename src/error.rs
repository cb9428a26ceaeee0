//! Error handling for the dynarray library
//!
//! All fallible operations report a [`DynArrayError`]. Lookups that the
//! container treats as ordinary misses (`find`, `get`, `delete`) return
//! `bool`/`Option` instead, and the error type offers constructors for
//! callers that want to turn those misses into errors.

use thiserror::Error;

/// Main error type for the dynarray library
#[derive(Error, Debug)]
pub enum DynArrayError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Position outside `[-size, size - 1]`
    #[error("Out of bounds: position {index}, size {size}")]
    OutOfBounds {
        /// The requested position, before negative positions are resolved
        index: isize,
        /// Number of live elements at the time of the request
        size: usize,
    },

    /// No element compared equal to the probe
    #[error("Element not found: {context}")]
    NotFound {
        /// Operation that failed to find a match
        context: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl DynArrayError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: isize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(context: S) -> Self {
        Self::NotFound { context: context.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::NotFound { .. } => true,
            Self::OutOfBounds { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfBounds { .. } => "bounds",
            Self::NotFound { .. } => "not_found",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DynArrayError>;

/// Resolve a possibly negative position against `size` live elements.
///
/// Non-negative positions in `[0, size)` are used as-is; negative positions
/// in `[-size, -1]` count from the end, so `-1` is the last element.
#[inline]
pub fn check_position(pos: isize, size: usize) -> Result<usize> {
    let resolved = if pos < 0 {
        size.checked_sub(pos.unsigned_abs())
    } else if (pos as usize) < size {
        Some(pos as usize)
    } else {
        None
    };

    resolved.ok_or_else(|| DynArrayError::out_of_bounds(pos, size))
}
