//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use leo_common::AppError;
use leo_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or repository/platform failure
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Application error (auth, config, etc.)
    #[error("{0}")]
    App(#[from] AppError),

    /// Resource not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict (e.g., object already stored)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check whether the admin guard rejected the call
    pub fn is_admin_rejection(&self) -> bool {
        matches!(
            self,
            Self::Domain(
                DomainError::AdminSessionRequired
                    | DomainError::NotAdmin
                    | DomainError::AccountNotAllowed
            )
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::Domain(e.clone()).status_code(),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Conflict(msg) => AppError::Conflict(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("Project", "123");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("Project not found: 123"));
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("Too many featured projects");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_admin_rejections() {
        let err = ServiceError::from(DomainError::NotAdmin);
        assert!(err.is_admin_rejection());
        assert_eq!(err.status_code(), 403);

        let err = ServiceError::from(DomainError::AdminSessionRequired);
        assert!(err.is_admin_rejection());
        assert_eq!(err.status_code(), 401);

        assert!(!ServiceError::from(DomainError::ConsentRequired).is_admin_rejection());
    }

    #[test]
    fn test_display_and_source() {
        use std::error::Error as _;

        let err = ServiceError::from(DomainError::ConsentRequired);
        assert_eq!(err.to_string(), "Consent is required to submit an application.");
        assert!(err.source().is_some());

        let err = ServiceError::internal("pool closed");
        assert_eq!(err.to_string(), "Internal error: pool closed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::conflict("Object already exists").into();
        assert_eq!(app_err.status_code(), 409);

        let app_err: AppError = ServiceError::from(DomainError::ConsentRequired).into();
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(app_err.error_code(), "CONSENT_REQUIRED");
    }
}
