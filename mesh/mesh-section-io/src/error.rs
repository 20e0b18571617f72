//! Error types for section serialization.

use thiserror::Error;

/// Result type for section serialization operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while encoding or decoding a mesh section.
#[derive(Debug, Error)]
pub enum IoError {
    /// The stream or buffer ended inside a declared region.
    #[error("truncated stream while reading {context}")]
    Truncated {
        /// What was being read when the data ran out.
        context: &'static str,
    },

    /// A declared count or size is impossible (negative, or overflows).
    #[error("corrupt stream: {message}")]
    CorruptStream {
        /// Description of what was invalid.
        message: String,
    },

    /// A buffer is too large for the wire format's 32-bit counts.
    #[error("section too large for wire format: {len} elements")]
    SectionTooLarge {
        /// Length of the offending buffer.
        len: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `CorruptStream` error with the given message.
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptStream {
            message: message.into(),
        }
    }
}
