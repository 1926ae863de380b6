//! Error types for the query service

use thiserror::Error;

/// Result type alias for query service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Query service errors
///
/// Retrieval errors never reach an HTTP status: `/query` folds them into
/// its message text.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure, non-success status or timeout while talking to the repository
    #[error("{0}")]
    Transport(String),

    /// Repository answered with a body that is not the expected JSON page.
    /// The detail is kept for logging only.
    #[error("malformed response")]
    MalformedResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a malformed-response error
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_hides_detail() {
        let err = Error::malformed("expected value at line 1 column 1");
        assert_eq!(err.to_string(), "malformed response");
    }

    #[test]
    fn test_transport_message_passthrough() {
        let err = Error::transport("HTTP 503 Service Unavailable");
        assert_eq!(err.to_string(), "HTTP 503 Service Unavailable");
    }

    #[test]
    fn test_toml_error_is_config_error() {
        let err: Error = toml::from_str::<toml::Value>("port = ").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
