//! Unified error type for titlewise.
//!
//! Identification itself never fails: every degenerate input produces an
//! empty result instead. [`Error`] covers the few places where a caller asks
//! for explicit feedback, such as validating a user-edited bad-word list or
//! loading a configuration file.

/// Error type covering all failure modes in titlewise.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A user-supplied pattern could not be compiled.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as the user wrote it.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },

    /// Configuration data failed validation or deserialization.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Convenience constructor for [`Error::InvalidPattern`].
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl ToString) -> Self {
        Error::InvalidPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
