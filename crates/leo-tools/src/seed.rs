//! Seed and fix file formats
//!
//! Seed rows are inserted as given, bypassing the admin form's normalization,
//! so they carry their own display order and date text.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use leo_core::{
    format_date_text, BoardMember, Faq, FeatureCard, PortfolioImage, Project, ServiceOffering,
    SiteSetting, Testimonial,
};

/// Read and parse a JSON seed file
pub async fn load<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid seed file {}: {e}", path.display()))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSeed {
    pub title: String,
    #[serde(default)]
    pub date_text: Option<String>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<String>,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub project_ref: Option<String>,
}

impl ProjectSeed {
    pub fn into_project(self) -> Project {
        let date_text = self
            .date_text
            .or_else(|| self.completion_date.map(format_date_text))
            .unwrap_or_default();

        Project {
            id: Uuid::new_v4(),
            title: self.title,
            date_text,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            gallery_images: self.gallery_images,
            is_featured: self.is_featured,
            display_order: self.display_order,
            project_ref: self.project_ref,
            completion_date: self.completion_date,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardMemberSeed {
    pub name: String,
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
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialSeed {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqSeed {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSeed {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon_name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCardSeed {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioImageSeed {
    pub image_url: String,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Homepage content for `seed-content`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentSeed {
    pub board_members: Vec<BoardMemberSeed>,
    pub testimonials: Vec<TestimonialSeed>,
    pub faqs: Vec<FaqSeed>,
    pub services: Vec<ServiceSeed>,
    pub feature_cards: Vec<FeatureCardSeed>,
    pub portfolio_images: Vec<PortfolioImageSeed>,
}

impl From<BoardMemberSeed> for BoardMember {
    fn from(seed: BoardMemberSeed) -> Self {
        let mut member = BoardMember::new(seed.name, seed.role, seed.display_order);
        member.image_url = seed.image_url;
        member.bio = seed.bio;
        member.email = seed.email;
        member.linkedin = seed.linkedin;
        member
    }
}

impl From<TestimonialSeed> for Testimonial {
    fn from(seed: TestimonialSeed) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: seed.name,
            role: seed.role,
            image_url: seed.image_url,
            quote: seed.quote,
            display_order: seed.display_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

impl From<FaqSeed> for Faq {
    fn from(seed: FaqSeed) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: seed.question,
            answer: seed.answer,
            display_order: seed.display_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

impl From<ServiceSeed> for ServiceOffering {
    fn from(seed: ServiceSeed) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: seed.title,
            description: seed.description,
            icon_name: seed.icon_name,
            display_order: seed.display_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

impl From<FeatureCardSeed> for FeatureCard {
    fn from(seed: FeatureCardSeed) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: seed.title,
            description: seed.description,
            image_url: seed.image_url,
            image_alt: seed.image_alt,
            display_order: seed.display_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

impl From<PortfolioImageSeed> for PortfolioImage {
    fn from(seed: PortfolioImageSeed) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url: seed.image_url,
            image_alt: seed.image_alt,
            display_order: seed.display_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// New image for the row at `display_order`
#[derive(Debug, Clone, Deserialize)]
pub struct ImageFix {
    pub display_order: i32,
    pub image_url: String,
    /// Left unchanged when absent
    #[serde(default)]
    pub image_alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingSeed {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<SettingSeed> for SiteSetting {
    fn from(seed: SettingSeed) -> Self {
        SiteSetting::new(seed.key, seed.value, seed.description)
    }
}

/// Fixes for `fix-images`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixesSeed {
    pub portfolio_images: Vec<ImageFix>,
    pub feature_cards: Vec<ImageFix>,
    pub settings: Vec<SettingSeed>,
}
