//! Common error types for the session token service.
//!
//! This crate provides unified error handling for token issuance
//! and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret is missing or too short ({length} bytes); must be at least 32 characters")]
    WeakSecret { length: usize },

    #[error("Token creation failed")]
    TokenCreationFailed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Subject is not a valid user id: {0}")]
    InvalidSubject(String),
}

/// Error response for API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let (code, message) = match &err {
            AuthError::WeakSecret { .. } => ("AUTH_WEAK_SECRET", "Signing secret is too short"),
            AuthError::TokenCreationFailed => ("AUTH_TOKEN_CREATION_FAILED", "Failed to create token"),
            AuthError::InvalidToken => ("AUTH_INVALID_TOKEN", "Invalid token"),
            AuthError::TokenExpired => ("AUTH_TOKEN_EXPIRED", "Token has expired"),
            AuthError::InvalidRole(_) => ("AUTH_INVALID_ROLE", "Role is not recognized"),
            AuthError::InvalidSubject(_) => ("AUTH_INVALID_SUBJECT", "Subject is not a valid user id"),
        };
        Self::new(code, message)
    }
}

/// Result type alias using AuthError.
pub type Result<T> = std::result::Result<T, AuthError>;
