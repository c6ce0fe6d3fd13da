//! Error types for testshape

use thiserror::Error;

/// Result type alias for testshape operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for testshape
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Container format error (Y4M reading/writing)
    #[error("Format error: {0}")]
    Format(String),

    /// Caps could not be negotiated
    #[error("Negotiation failed: {0}")]
    Negotiation(String),

    /// Unknown property or a value of the wrong type
    #[error("Property error: {0}")]
    Property(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported feature
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Buffer too small
    #[error("Buffer too small: need {need}, have {have}")]
    BufferTooSmall { need: usize, have: usize },
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create a negotiation error
    pub fn negotiation<S: Into<String>>(msg: S) -> Self {
        Error::Negotiation(msg.into())
    }

    /// Create a property error
    pub fn property<S: Into<String>>(msg: S) -> Self {
        Error::Property(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::property("no property named 'size'");
        assert_eq!(err.to_string(), "Property error: no property named 'size'");

        let err = Error::BufferTooSmall { need: 10, have: 4 };
        assert_eq!(err.to_string(), "Buffer too small: need 10, have 4");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
