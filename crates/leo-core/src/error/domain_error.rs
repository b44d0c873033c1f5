//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),

    #[error("Achievement not found: {0}")]
    AchievementNotFound(Uuid),

    #[error("{kind} not found: {id}")]
    ContentNotFound { kind: &'static str, id: Uuid },

    #[error("Membership application not found: {0}")]
    ApplicationNotFound(Uuid),

    #[error("Site setting not found: {0}")]
    SettingNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Please complete all required fields.")]
    MissingRequiredFields,

    #[error("Consent is required to submit an application.")]
    ConsentRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Too many featured {kind}: max {max}")]
    FeaturedLimitExceeded { kind: &'static str, max: usize },

    #[error("Please upload an image file.")]
    NotAnImage,

    #[error("Image size must be less than {max_mb}MB.")]
    ImageTooLarge { max_mb: u32 },

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Admin session required.")]
    AdminSessionRequired,

    #[error("Only the configured admin account can perform this action.")]
    NotAdmin,

    #[error("This account is not allowed to access admin dashboard.")]
    AccountNotAllowed,

    #[error("{0}")]
    InvalidCredentials(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Object already exists: {0}")]
    ObjectExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Auth provider error: {0}")]
    AuthProviderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProjectNotFound(_) => "UNKNOWN_PROJECT",
            Self::AchievementNotFound(_) => "UNKNOWN_ACHIEVEMENT",
            Self::ContentNotFound { .. } => "UNKNOWN_CONTENT",
            Self::ApplicationNotFound(_) => "UNKNOWN_APPLICATION",
            Self::SettingNotFound(_) => "UNKNOWN_SETTING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::ConsentRequired => "CONSENT_REQUIRED",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::FeaturedLimitExceeded { .. } => "FEATURED_LIMIT_EXCEEDED",
            Self::NotAnImage => "NOT_AN_IMAGE",
            Self::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",

            // Authentication / Authorization
            Self::AdminSessionRequired => "ADMIN_SESSION_REQUIRED",
            Self::NotAdmin => "NOT_ADMIN",
            Self::AccountNotAllowed => "ACCOUNT_NOT_ALLOWED",
            Self::InvalidCredentials(_) => "INVALID_CREDENTIALS",

            // Conflict
            Self::ObjectExists(_) => "OBJECT_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::AuthProviderError(_) => "AUTH_PROVIDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound(_)
                | Self::AchievementNotFound(_)
                | Self::ContentNotFound { .. }
                | Self::ApplicationNotFound(_)
                | Self::SettingNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingRequiredFields
                | Self::ConsentRequired
                | Self::InvalidEmail
                | Self::FeaturedLimitExceeded { .. }
                | Self::NotAnImage
                | Self::ImageTooLarge { .. }
        )
    }

    /// Check if the caller is missing a (valid) session
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::AdminSessionRequired | Self::InvalidCredentials(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotAdmin | Self::AccountNotAllowed)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ObjectExists(_))
    }
}
