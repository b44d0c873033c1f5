//! Homepage section records - testimonials, FAQs, services, feature cards and
//! portfolio images. Each one is ordered by `display_order` and can be hidden
//! from the public site with `is_active = false`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::BoardMember;
use crate::error::DomainError;

/// Common shape of the simple, orderable content records
pub trait ContentRecord: Clone + Send + Sync + 'static {
    /// Human readable record kind, used in not-found errors
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn display_order(&self) -> i32;

    fn is_active(&self) -> bool;

    /// Not-found error for this record kind
    fn not_found(id: Uuid) -> DomainError {
        DomainError::ContentNotFound {
            kind: Self::KIND,
            id,
        }
    }
}

/// Testimonial quote on the homepage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub quote: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Service the club offers (stored in the `services` table)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon identifier understood by the frontend
    pub icon_name: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// "Why choose us" feature card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Portfolio gallery image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioImage {
    pub id: Uuid,
    pub image_url: String,
    pub image_alt: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

macro_rules! impl_content_record {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl ContentRecord for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> Uuid {
                    self.id
                }

                fn display_order(&self) -> i32 {
                    self.display_order
                }

                fn is_active(&self) -> bool {
                    self.is_active
                }
            }
        )+
    };
}

impl_content_record! {
    BoardMember => "Board member",
    Testimonial => "Testimonial",
    Faq => "FAQ",
    ServiceOffering => "Service",
    FeatureCard => "Feature card",
    PortfolioImage => "Portfolio image",
}
