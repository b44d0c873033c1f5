//! # leo-core
//!
//! Domain layer for the club website CMS: content records, value objects,
//! the admin policy, and the ports (repository, storage and auth traits)
//! implemented by the infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod admin;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use admin::{AdminIdentity, AdminPolicy};
pub use entities::{
    format_date_text, Achievement, BoardMember, ContentRecord, Faq, FeatureCard, FeaturedAchievement,
    FeaturedProject, MembershipApplication, PortfolioImage, Project, ServiceOffering, Session,
    SiteSetting, Testimonial, MAX_FEATURED_ACHIEVEMENTS, MAX_FEATURED_PROJECTS,
    STATS_SETTING_KEY,
};
pub use error::DomainError;
pub use traits::{
    AchievementRepository, AuthProvider, BucketInfo, ContentRepository, FeaturedRepository,
    MembershipApplicationRepository, ObjectStorage, ProjectRepository, RepoResult,
    SiteSettingRepository, StoredObject, UploadObject,
};
pub use value_objects::{
    AchievementCategory, ApplicationStatus, ImageFolder, PROJECT_CATEGORIES,
};
