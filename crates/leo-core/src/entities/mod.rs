//! Domain entities - the records managed through the CMS

mod achievement;
mod application;
mod board_member;
mod featured;
mod project;
mod section;
mod session;
mod site_setting;

pub use achievement::Achievement;
pub use application::MembershipApplication;
pub use board_member::BoardMember;
pub use featured::{
    FeaturedAchievement, FeaturedProject, MAX_FEATURED_ACHIEVEMENTS, MAX_FEATURED_PROJECTS,
};
pub use project::{format_date_text, Project};
pub use section::{ContentRecord, Faq, FeatureCard, PortfolioImage, ServiceOffering, Testimonial};
pub use session::Session;
pub use site_setting::{SiteSetting, STATS_SETTING_KEY};
