//! Achievement database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for achievements table
#[derive(Debug, Clone, FromRow)]
pub struct AchievementModel {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub details: Vec<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}
