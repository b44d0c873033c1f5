//! Database models - SQLx-compatible structs for PostgreSQL tables

mod achievement;
mod application;
mod content;
mod featured;
mod project;
mod site_setting;

pub use achievement::AchievementModel;
pub use application::MembershipApplicationModel;
pub use content::{
    BoardMemberModel, FaqModel, FeatureCardModel, PortfolioImageModel, ServiceModel,
    TestimonialModel,
};
pub use featured::{FeaturedAchievementModel, FeaturedProjectModel};
pub use project::ProjectModel;
pub use site_setting::SiteSettingModel;
