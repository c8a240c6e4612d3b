// --- File: crates/dentify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Dentify errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for DentifyError.
#[derive(Error, Debug)]
pub enum DentifyError {
    /// Error occurred during an HTTP request (transport level)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The server answered 401: no authenticated customer session
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during client-side validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The server rejected the request with an error payload
    #[error("Rejected ({status}): {message}")]
    RejectedError { status: u16, message: String },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for DentifyError {
    fn status_code(&self) -> u16 {
        match self {
            DentifyError::HttpError(_) => 502,
            DentifyError::ParseError(_) => 502,
            DentifyError::ConfigError(_) => 500,
            DentifyError::AuthError(_) => 401,
            DentifyError::ValidationError(_) => 400,
            DentifyError::NotFoundError(_) => 404,
            DentifyError::RejectedError { status, .. } => *status,
            DentifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, DentifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, DentifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, DentifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| DentifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, DentifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| DentifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for DentifyError {
    fn from(err: reqwest::Error) -> Self {
        DentifyError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for DentifyError {
    fn from(err: serde_json::Error) -> Self {
        DentifyError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for DentifyError {
    fn from(err: std::io::Error) -> Self {
        DentifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> DentifyError {
    DentifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> DentifyError {
    DentifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> DentifyError {
    DentifyError::NotFoundError(message.to_string())
}

pub fn rejected<T: fmt::Display>(status: u16, message: T) -> DentifyError {
    DentifyError::RejectedError {
        status,
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> DentifyError {
    DentifyError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_taxonomy() {
        assert_eq!(DentifyError::AuthError("no session".into()).status_code(), 401);
        assert_eq!(DentifyError::NotFoundError("appointment 9".into()).status_code(), 404);
        assert_eq!(
            DentifyError::ValidationError("missing contact".into()).status_code(),
            400
        );
        assert_eq!(rejected(400, "SLOT_FULL").status_code(), 400);
        assert_eq!(rejected(409, "BOOKING_CONFLICT").status_code(), 409);
        assert_eq!(DentifyError::HttpError("connection refused".into()).status_code(), 502);
    }

    #[test]
    fn test_rejected_display_keeps_server_message() {
        let err = rejected(400, "Check-in not allowed.");
        assert_eq!(err.to_string(), "Rejected (400): Check-in not allowed.");
    }

    #[test]
    fn test_context_wraps_foreign_errors() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = result.context("reading kiosk input").unwrap_err();
        match err {
            DentifyError::InternalError(message) => {
                assert!(message.starts_with("reading kiosk input"), "got: {}", message);
            }
            other => panic!("expected InternalError, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_json_errors_become_parse_errors() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DentifyError = parse_failure.into();
        assert!(matches!(err, DentifyError::ParseError(_)));
    }
}
