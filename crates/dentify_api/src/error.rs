// --- File: crates/dentify_api/src/error.rs ---
use dentify_common::{DentifyError, HttpStatusCode};
use thiserror::Error;

/// Clinic-API-specific error types.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error occurred during the HTTP request itself
    #[error("Clinic API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error parsing a clinic API response body
    #[error("Failed to parse clinic API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The server answered 401: the customer session is missing or expired
    #[error("Not authenticated")]
    Unauthenticated,

    /// The server answered 404 for the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request with an error payload
    #[error("Clinic API rejected the request: {message} (Status: {status})")]
    Rejected { status: u16, message: String },

    /// Missing or invalid client configuration
    #[error("Clinic API configuration error: {0}")]
    ConfigError(String),
}

/// Convert ApiError to DentifyError
impl From<ApiError> for DentifyError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestError(e) => {
                DentifyError::HttpError(format!("Clinic API request error: {}", e))
            }
            ApiError::ParseError(e) => {
                DentifyError::ParseError(format!("Clinic API response parse error: {}", e))
            }
            ApiError::Unauthenticated => DentifyError::AuthError("Not authenticated".to_string()),
            ApiError::NotFound(what) => DentifyError::NotFoundError(what),
            ApiError::Rejected { status, message } => {
                DentifyError::RejectedError { status, message }
            }
            ApiError::ConfigError(msg) => DentifyError::ConfigError(msg),
        }
    }
}

/// Implement HttpStatusCode for ApiError to provide a consistent way to convert
/// ApiError to HTTP status codes.
impl HttpStatusCode for ApiError {
    fn status_code(&self) -> u16 {
        match self {
            ApiError::RequestError(_) => 502,
            ApiError::ParseError(_) => 502,
            ApiError::Unauthenticated => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Rejected { status, .. } => *status,
            ApiError::ConfigError(_) => 500,
        }
    }
}
