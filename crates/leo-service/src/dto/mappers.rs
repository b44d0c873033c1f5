//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use leo_core::entities::{
    Achievement, BoardMember, Faq, FeatureCard, FeaturedAchievement, FeaturedProject,
    MembershipApplication, PortfolioImage, Project, ServiceOffering, SiteSetting, Testimonial,
};
use leo_core::AdminIdentity;

use super::responses::{
    AchievementPageResponse, AchievementResponse, AdminUserResponse, ApplicationResponse,
    BoardMemberResponse, FaqResponse, FeatureCardResponse, FeaturedAchievementResponse,
    FeaturedProjectResponse, PortfolioImageResponse, ProjectResponse, ServiceOfferingResponse,
    SiteSettingResponse, TestimonialResponse,
};
use leo_core::AchievementCategory;

// ============================================================================
// Project / Achievement Mappers
// ============================================================================

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            date: project.date_text,
            category: project.category,
            description: project.description,
            image_url: project.image_url,
            gallery_images: project.gallery_images,
            is_featured: project.is_featured,
            display_order: project.display_order,
            project_ref: project.project_ref,
            completion_date: project.completion_date,
            created_at: project.created_at,
        }
    }
}

impl From<Achievement> for AchievementResponse {
    fn from(achievement: Achievement) -> Self {
        Self {
            id: achievement.id,
            category: achievement.category,
            title: achievement.title,
            details: achievement.details,
            image_url: achievement.image_url,
            image_alt: achievement.image_alt,
            display_order: achievement.display_order,
            created_at: achievement.created_at,
        }
    }
}

impl FromIterator<Achievement> for AchievementPageResponse {
    fn from_iter<I: IntoIterator<Item = Achievement>>(iter: I) -> Self {
        let mut page = Self::default();
        for achievement in iter {
            let bucket = match achievement.category {
                AchievementCategory::Project => &mut page.project,
                AchievementCategory::Individual => &mut page.individual,
                AchievementCategory::Special => &mut page.special,
            };
            bucket.push(achievement.into());
        }
        page
    }
}

impl From<FeaturedProject> for FeaturedProjectResponse {
    fn from(featured: FeaturedProject) -> Self {
        Self {
            featured_order: featured.featured_order,
            project: featured.project.into(),
        }
    }
}

impl From<FeaturedAchievement> for FeaturedAchievementResponse {
    fn from(featured: FeaturedAchievement) -> Self {
        Self {
            featured_order: featured.featured_order,
            achievement: featured.achievement.into(),
        }
    }
}

// ============================================================================
// Section Mappers
// ============================================================================

impl From<BoardMember> for BoardMemberResponse {
    fn from(member: BoardMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role,
            image_url: member.image_url,
            bio: member.bio,
            email: member.email,
            linkedin: member.linkedin,
            display_order: member.display_order,
            is_active: member.is_active,
            created_at: member.created_at,
        }
    }
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name,
            role: t.role,
            image_url: t.image_url,
            quote: t.quote,
            display_order: t.display_order,
            is_active: t.is_active,
        }
    }
}

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
            display_order: faq.display_order,
            is_active: faq.is_active,
        }
    }
}

impl From<ServiceOffering> for ServiceOfferingResponse {
    fn from(service: ServiceOffering) -> Self {
        Self {
            id: service.id,
            title: service.title,
            description: service.description,
            icon_name: service.icon_name,
            display_order: service.display_order,
            is_active: service.is_active,
        }
    }
}

impl From<FeatureCard> for FeatureCardResponse {
    fn from(card: FeatureCard) -> Self {
        Self {
            id: card.id,
            title: card.title,
            description: card.description,
            image_url: card.image_url,
            image_alt: card.image_alt,
            display_order: card.display_order,
            is_active: card.is_active,
        }
    }
}

impl From<PortfolioImage> for PortfolioImageResponse {
    fn from(image: PortfolioImage) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
            image_alt: image.image_alt,
            display_order: image.display_order,
            is_active: image.is_active,
        }
    }
}

// ============================================================================
// Settings / Membership / Admin Mappers
// ============================================================================

impl From<SiteSetting> for SiteSettingResponse {
    fn from(setting: SiteSetting) -> Self {
        Self {
            key: setting.key,
            value: setting.value,
            description: setting.description,
            updated_at: setting.updated_at,
        }
    }
}

impl From<MembershipApplication> for ApplicationResponse {
    fn from(app: MembershipApplication) -> Self {
        Self {
            id: app.id,
            full_name: app.full_name,
            email: app.email,
            phone: app.phone,
            age: app.age,
            organization: app.organization,
            motivation: app.motivation,
            consent: app.consent,
            status: app.status,
            admin_notes: app.admin_notes,
            reviewed_at: app.reviewed_at,
            reviewer_email: app.reviewer_email,
            created_at: app.created_at,
        }
    }
}

impl From<AdminIdentity> for AdminUserResponse {
    fn from(identity: AdminIdentity) -> Self {
        Self {
            id: identity.user_id,
            email: identity.email,
        }
    }
}
