//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use leo_core::{AchievementCategory, ApplicationStatus};

// ============================================================================
// Admin Auth Responses
// ============================================================================

/// Session handed to the admin dashboard after sign-in
#[derive(Debug, Clone, Serialize)]
pub struct AdminSessionResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AdminUserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub email: String,
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    /// "Month YYYY"
    pub date: String,
    pub category: Option<String>,
    pub description: String,
    pub image_url: String,
    pub gallery_images: Vec<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub project_ref: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementResponse {
    pub id: Uuid,
    pub category: AchievementCategory,
    pub title: String,
    pub details: Vec<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Achievements grouped the way the achievements page shows them
#[derive(Debug, Clone, Default, Serialize)]
pub struct AchievementPageResponse {
    pub project: Vec<AchievementResponse>,
    pub individual: Vec<AchievementResponse>,
    pub special: Vec<AchievementResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardMemberResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub quote: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqResponse {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOfferingResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCardResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioImageResponse {
    pub id: Uuid,
    pub image_url: String,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteSettingResponse {
    pub key: String,
    pub value: Value,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// All settings keyed by name
pub type SettingsMapResponse = BTreeMap<String, Value>;

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedProjectResponse {
    pub featured_order: i32,
    #[serde(flatten)]
    pub project: ProjectResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedAchievementResponse {
    pub featured_order: i32,
    #[serde(flatten)]
    pub achievement: AchievementResponse,
}

// ============================================================================
// Membership Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub organization: Option<String>,
    pub motivation: String,
    pub consent: bool,
    pub status: ApplicationStatus,
    pub admin_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned to the public join form
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReceiptResponse {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub message: String,
}

// ============================================================================
// Media Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedImageResponse {
    pub url: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteImageResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectFolderResponse {
    pub folder: String,
}

// ============================================================================
// Landing Page
// ============================================================================

/// Everything the landing page renders, in one payload
#[derive(Debug, Clone, Default, Serialize)]
pub struct LandingPageResponse {
    pub featured_projects: Vec<FeaturedProjectResponse>,
    pub featured_achievements: Vec<FeaturedAchievementResponse>,
    pub testimonials: Vec<TestimonialResponse>,
    pub faqs: Vec<FaqResponse>,
    pub services: Vec<ServiceOfferingResponse>,
    pub feature_cards: Vec<FeatureCardResponse>,
    pub portfolio_images: Vec<PortfolioImageResponse>,
    pub settings: SettingsMapResponse,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
