//! Board member and section model -> entity mappers

use leo_core::entities::{
    BoardMember, Faq, FeatureCard, PortfolioImage, ServiceOffering, Testimonial,
};

use crate::models::{
    BoardMemberModel, FaqModel, FeatureCardModel, PortfolioImageModel, ServiceModel,
    TestimonialModel,
};

impl From<BoardMemberModel> for BoardMember {
    fn from(model: BoardMemberModel) -> Self {
        BoardMember {
            id: model.id,
            name: model.name,
            role: model.role,
            image_url: model.image_url,
            bio: model.bio,
            email: model.email,
            linkedin: model.linkedin,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<TestimonialModel> for Testimonial {
    fn from(model: TestimonialModel) -> Self {
        Testimonial {
            id: model.id,
            name: model.name,
            role: model.role,
            image_url: model.image_url,
            quote: model.quote,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<FaqModel> for Faq {
    fn from(model: FaqModel) -> Self {
        Faq {
            id: model.id,
            question: model.question,
            answer: model.answer,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<ServiceModel> for ServiceOffering {
    fn from(model: ServiceModel) -> Self {
        ServiceOffering {
            id: model.id,
            title: model.title,
            description: model.description,
            icon_name: model.icon_name,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<FeatureCardModel> for FeatureCard {
    fn from(model: FeatureCardModel) -> Self {
        FeatureCard {
            id: model.id,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            image_alt: model.image_alt,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<PortfolioImageModel> for PortfolioImage {
    fn from(model: PortfolioImageModel) -> Self {
        PortfolioImage {
            id: model.id,
            image_url: model.image_url,
            image_alt: model.image_alt,
            display_order: model.display_order,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
