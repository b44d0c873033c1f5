//! Project database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for projects table
#[derive(Debug, Clone, FromRow)]
pub struct ProjectModel {
    pub id: Uuid,
    pub title: String,
    pub date_text: String,
    pub category: Option<String>,
    pub description: String,
    pub image_url: String,
    pub gallery_images: Vec<String>,
    pub is_featured: bool,
    pub display_order: i32,
    /// Hand-assigned project reference (not a foreign key)
    pub project_id: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
