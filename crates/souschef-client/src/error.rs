//! # Client Error Types
//!
//! Error handling for the Kitchen API client and the CLI built on it.
//!
//! Three failure classes are kept apart so callers can tell them apart:
//! the service never answered ([`ClientError::Transport`]), it answered with
//! a status the operation does not expect ([`ClientError::UnexpectedStatus`]),
//! or it answered with a payload that does not fit the expected shape
//! ([`ClientError::Validation`]).

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response status: {status} - {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid {model} payload: {source}")]
    Validation {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Create an unexpected-status error from a response status and body
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error for a payload that failed to decode
    pub fn validation(model: &'static str, source: serde_json::Error) -> Self {
        Self::Validation { model, source }
    }

    /// True when the remote host could not be reached at all: DNS failure,
    /// refused connection, or a request timeout.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        match self {
            ClientError::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status carried by the error, if the service answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_unexpected_status_constructor() {
        let err = ClientError::unexpected_status(500, "boom");
        match err {
            ClientError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            _ => panic!("Expected UnexpectedStatus variant"),
        }
    }

    #[test]
    fn test_config_error_constructor() {
        let err = ClientError::config_error("bad header");
        match err {
            ClientError::Config(msg) => assert_eq!(msg, "bad header"),
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ClientError::unexpected_status(502, "").status(), Some(502));
        assert_eq!(ClientError::config_error("x").status(), None);
        assert_eq!(ClientError::validation("SystemStatus", json_error()).status(), None);
    }

    #[test]
    fn test_non_transport_errors_are_not_connection_failures() {
        assert!(!ClientError::unexpected_status(503, "down").is_connection_failure());
        assert!(!ClientError::validation("AuthStatus", json_error()).is_connection_failure());
        assert!(!ClientError::InvalidInput("empty".to_string()).is_connection_failure());
    }

    #[test]
    fn test_display_unexpected_status() {
        let err = ClientError::unexpected_status(500, "internal error");
        assert_eq!(
            format!("{err}"),
            "Unexpected response status: 500 - internal error"
        );
    }

    #[test]
    fn test_display_validation() {
        let err = ClientError::validation("SystemStatus", json_error());
        assert!(format!("{err}").starts_with("Invalid SystemStatus payload:"));
    }

    #[test]
    fn test_display_auth_error() {
        let err = ClientError::AuthError("credentials rejected".to_string());
        assert_eq!(format!("{err}"), "Authentication failed: credentials rejected");
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: ClientError = parse_err.into();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
        let err: ClientError = io_err.into();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
