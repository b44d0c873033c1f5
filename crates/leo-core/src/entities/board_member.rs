//! Board member entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Board member shown on the board page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMember {
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

impl BoardMember {
    /// Create an active board member
    pub fn new(name: String, role: String, display_order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            role,
            image_url: None,
            bio: None,
            email: None,
            linkedin: None,
            display_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
