//! Board member and homepage section models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for board_members table
#[derive(Debug, Clone, FromRow)]
pub struct BoardMemberModel {
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

/// Database model for testimonials table
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialModel {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub quote: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for faqs table
#[derive(Debug, Clone, FromRow)]
pub struct FaqModel {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for services table
#[derive(Debug, Clone, FromRow)]
pub struct ServiceModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for feature_cards table
#[derive(Debug, Clone, FromRow)]
pub struct FeatureCardModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for portfolio_images table
#[derive(Debug, Clone, FromRow)]
pub struct PortfolioImageModel {
    pub id: Uuid,
    pub image_url: String,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
