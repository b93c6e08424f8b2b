//! Error types for hsmath

use thiserror::Error;

/// Result type alias using hsmath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hsmath operations
#[derive(Error, Debug)]
pub enum Error {
    /// Both the quadratic and the linear coefficient are zero
    #[error("Degenerate equation: a = 0 and b = 0 leave nothing to solve")]
    DegenerateEquation,

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// An integer result does not fit its type
    #[error("Overflow computing {what} at index {index}")]
    Overflow {
        /// What was being computed
        what: &'static str,
        /// Position in the sequence where the overflow happened
        index: usize,
    },

    /// A figure was rendered before any series was added
    #[error("Figure has no series to render")]
    EmptyFigure,

    /// A numeric conversion or scale mapping was not representable
    #[error("Numeric conversion failed: {what}")]
    Conversion {
        /// The value or mapping that failed
        what: &'static str,
    },

    /// Formatting the SVG document failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Writing a rendered figure failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
