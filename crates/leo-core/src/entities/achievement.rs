//! Achievement entity - an award or recognition the club received

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::AchievementCategory;

/// Achievement entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: Uuid,
    pub category: AchievementCategory,
    pub title: String,
    /// Detail lines, in display order
    pub details: Vec<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Achievement {
    /// Create a new achievement
    pub fn new(category: AchievementCategory, title: String, details: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            title,
            details,
            image_url: None,
            image_alt: None,
            display_order: 0,
            created_at: Utc::now(),
        }
    }
}
