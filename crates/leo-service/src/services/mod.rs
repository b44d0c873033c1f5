//! Business logic services
//!
//! Every privileged operation takes the caller's [`Session`](leo_core::Session)
//! and runs the admin guard before touching a repository or the bucket.

pub mod achievement;
pub mod admin_auth;
pub mod context;
pub mod error;
pub mod featured;
pub mod home;
pub mod media;
pub mod membership;
pub mod project;
pub mod section;
pub mod settings;
mod text;

pub use achievement::AchievementService;
pub use admin_auth::AdminAuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use featured::FeaturedService;
pub use home::HomeService;
pub use media::MediaService;
pub use membership::MembershipService;
pub use project::ProjectService;
pub use section::{BoardMemberService, SectionContent, SectionService};
pub use settings::SettingsService;
