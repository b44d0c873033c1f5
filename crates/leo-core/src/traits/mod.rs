//! Ports implemented by the infrastructure crates

mod platform;
mod repositories;

pub use platform::{AuthProvider, BucketInfo, ObjectStorage, StoredObject, UploadObject};
pub use repositories::{
    AchievementRepository, ContentRepository, FeaturedRepository, MembershipApplicationRepository,
    ProjectRepository, RepoResult, SiteSettingRepository,
};
