//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate`. Shape checks live here;
//! trimming and blank-to-null normalization happen in the services.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use leo_core::{AchievementCategory, ApplicationStatus, ImageFolder};

// ============================================================================
// Admin Auth Requests
// ============================================================================

/// Admin password sign-in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Membership Requests
// ============================================================================

/// Public join form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(max = 200, message = "Full name must be at most 200 characters"))]
    pub full_name: String,

    pub email: String,

    #[validate(length(max = 40, message = "Phone must be at most 40 characters"))]
    pub phone: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i32,

    #[serde(default)]
    pub organization: Option<String>,

    #[validate(length(max = 4000, message = "Motivation must be at most 4000 characters"))]
    pub motivation: String,

    #[serde(default)]
    pub consent: bool,
}

/// Admin review decision
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewApplicationRequest {
    pub status: ApplicationStatus,

    #[validate(length(max = 4000, message = "Notes must be at most 4000 characters"))]
    pub admin_notes: Option<String>,
}

// ============================================================================
// Project Requests
// ============================================================================

/// Create project request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub description: String,

    /// One of the fixed project categories; blank means uncategorized
    #[serde(default)]
    pub category: Option<String>,

    pub image_url: String,

    #[serde(default)]
    pub gallery_images: Vec<String>,

    pub completion_date: NaiveDate,

    /// External reference such as "P-2025-014"
    #[serde(default)]
    pub project_ref: Option<String>,
}

/// Update project request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    /// Blank clears the category
    pub category: Option<String>,

    pub image_url: Option<String>,

    pub gallery_images: Option<Vec<String>>,

    pub completion_date: Option<NaiveDate>,

    pub is_featured: Option<bool>,

    pub display_order: Option<i32>,

    pub project_ref: Option<String>,
}

// ============================================================================
// Achievement Requests
// ============================================================================

/// Create achievement request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAchievementRequest {
    #[serde(default)]
    pub category: Option<AchievementCategory>,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[serde(default)]
    pub details: Vec<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub image_alt: Option<String>,

    #[serde(default)]
    pub display_order: Option<i32>,
}

/// Update achievement request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAchievementRequest {
    pub category: Option<AchievementCategory>,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,

    pub details: Option<Vec<String>>,

    pub image_url: Option<String>,

    pub image_alt: Option<String>,

    pub display_order: Option<i32>,
}

// ============================================================================
// Board Member Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoardMemberRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Role must be 1-200 characters"))]
    pub role: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBoardMemberRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Role must be 1-200 characters"))]
    pub role: Option<String>,

    pub image_url: Option<String>,

    pub bio: Option<String>,

    pub email: Option<String>,

    pub linkedin: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

// ============================================================================
// Homepage Section Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[validate(length(min = 1, message = "Quote is required"))]
    pub quote: String,

    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub role: Option<String>,

    pub image_url: Option<String>,

    #[validate(length(min = 1, message = "Quote is required"))]
    pub quote: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaqRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,

    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFaqRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: Option<String>,

    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Icon identifier understood by the site, e.g. "heart"
    #[validate(length(min = 1, max = 100, message = "Icon name must be 1-100 characters"))]
    pub icon_name: String,

    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Icon name must be 1-100 characters"))]
    pub icon_name: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeatureCardRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub image_alt: Option<String>,

    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeatureCardRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub image_url: Option<String>,

    pub image_alt: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioImageRequest {
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,

    #[serde(default)]
    pub image_alt: Option<String>,

    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePortfolioImageRequest {
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: Option<String>,

    pub image_alt: Option<String>,

    pub display_order: Option<i32>,

    pub is_active: Option<bool>,
}

// ============================================================================
// Settings / Featured Requests
// ============================================================================

/// Store a JSON value under a settings key
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertSettingRequest {
    pub value: Value,

    #[serde(default)]
    pub description: Option<String>,
}

/// Replace the featured list; order of `ids` is the display order
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFeaturedRequest {
    pub ids: Vec<Uuid>,
}

// ============================================================================
// Media Requests
// ============================================================================

/// Image upload, assembled from a multipart form by the HTTP layer
#[derive(Debug, Clone)]
pub struct UploadImageRequest {
    pub folder: ImageFolder,
    pub subfolder: Option<String>,
    /// Name of the file as sent by the client; used for the extension
    pub original_name: String,
    /// Base name to store under instead of a generated one
    pub custom_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteImageRequest {
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Compute the storage folder for a project's images
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectFolderRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub date: NaiveDate,
}
