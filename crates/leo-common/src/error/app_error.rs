//! Application error types
//!
//! Unified error handling for the entire application.

use std::fmt;

use leo_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidToken | Self::TokenExpired => 401,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_unauthenticated() {
        401
    } else if err.is_authorization() {
        403
    } else if matches!(err, DomainError::ImageTooLarge { .. }) {
        413
    } else if err.is_validation() {
        400
    } else if err.is_conflict() {
        409
    } else if matches!(
        err,
        DomainError::StorageError(_) | DomainError::AuthProviderError(_)
    ) {
        502
    } else {
        500
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::NotFound("project".to_string()).status_code(), 404);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Conflict("a.jpg".to_string()).status_code(), 409);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(AppError::Config("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(AppError::from(DomainError::AdminSessionRequired).status_code(), 401);
        assert_eq!(AppError::from(DomainError::NotAdmin).status_code(), 403);
        assert_eq!(AppError::from(DomainError::AccountNotAllowed).status_code(), 403);
        assert_eq!(AppError::from(DomainError::ConsentRequired).status_code(), 400);
        assert_eq!(
            AppError::from(DomainError::ImageTooLarge { max_mb: 5 }).status_code(),
            413
        );
        assert_eq!(
            AppError::from(DomainError::ProjectNotFound(Uuid::nil())).status_code(),
            404
        );
        assert_eq!(
            AppError::from(DomainError::ObjectExists("a.jpg".to_string())).status_code(),
            409
        );
        assert_eq!(
            AppError::from(DomainError::StorageError("down".to_string())).status_code(),
            502
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(AppError::NotFound("x".to_string()).error_code(), "NOT_FOUND");
        assert_eq!(AppError::from(DomainError::NotAdmin).error_code(), "NOT_ADMIN");
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::InvalidToken.is_client_error());
        assert!(!AppError::Database("test".to_string()).is_client_error());
        assert!(AppError::internal(anyhow::anyhow!("boom")).is_server_error());
    }

    #[test]
    fn test_error_response_keeps_domain_message() {
        let err = AppError::from(DomainError::MissingRequiredFields);
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "MISSING_REQUIRED_FIELDS");
        assert_eq!(response.message, "Please complete all required fields.");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_helper_methods() {
        let err = AppError::not_found("project 123");
        assert_eq!(err.to_string(), "Resource not found: project 123");

        let err = AppError::validation("title is required");
        assert_eq!(err.to_string(), "Validation error: title is required");
    }
}
