//! Site setting database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for site_settings table
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingModel {
    pub key: String,
    pub value: serde_json::Value,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}
