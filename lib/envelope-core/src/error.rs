//! Error types for envelope.

use derive_more::{Display, Error, From};

/// Main error type for envelope operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// An error code was used that nobody registered.
    ///
    /// This is a programming defect, not a condition to report to clients.
    #[display("error code {code} not registered in the error registry")]
    #[from(skip)]
    UnregisteredErrorCode {
        /// The unknown error code.
        code: i64,
    },

    /// The response (usually its content) could not be serialized.
    #[display("serialization error: {_0}")]
    #[from]
    Serialization(serde_json::Error),

    /// Writing the rendered body to an output sink failed.
    #[display("output sink error: {_0}")]
    #[from]
    Sink(std::io::Error),

    /// The status code is not accepted by the `http` crate.
    #[display("invalid HTTP status code {status_code}")]
    #[from(skip)]
    InvalidStatusCode {
        /// The rejected status code.
        status_code: u16,
    },

    /// A rendered envelope could not be decoded.
    #[display("envelope decoding error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the error (e.g., "content.user.name").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unregistered error code error.
    #[must_use]
    pub const fn unregistered_error_code(code: i64) -> Self {
        Self::UnregisteredErrorCode { code }
    }

    /// Create a decoding error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an unregistered error code error.
    #[must_use]
    pub const fn is_unregistered_error_code(&self) -> bool {
        matches!(self, Self::UnregisteredErrorCode { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    /// Returns the error code if this is an unregistered error code error.
    #[must_use]
    pub const fn error_code(&self) -> Option<i64> {
        match self {
            Self::UnregisteredErrorCode { code } => Some(*code),
            _ => None,
        }
    }
}
