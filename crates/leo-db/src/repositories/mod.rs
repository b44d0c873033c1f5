//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in leo-core.
//! Each repository handles database operations for one table.

mod achievement;
mod application;
mod content;
mod error;
mod featured;
mod project;
mod site_setting;

pub use achievement::PgAchievementRepository;
pub use application::PgMembershipApplicationRepository;
pub use content::{
    ContentTable, PgBoardMemberRepository, PgContentRepository, PgFaqRepository,
    PgFeatureCardRepository, PgPortfolioImageRepository, PgServiceOfferingRepository,
    PgTestimonialRepository,
};
pub use featured::PgFeaturedRepository;
pub use project::PgProjectRepository;
pub use site_setting::PgSiteSettingRepository;
