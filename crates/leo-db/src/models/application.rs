//! Membership application database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for membership_applications table
#[derive(Debug, Clone, FromRow)]
pub struct MembershipApplicationModel {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub organization: Option<String>,
    pub motivation: String,
    pub consent: bool,
    pub status: String,
    pub admin_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_email: Option<String>,
    pub created_at: DateTime<Utc>,
}
