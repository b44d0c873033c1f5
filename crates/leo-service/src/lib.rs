//! # leo-service
//!
//! Application layer: the admin guard, per-domain services, and the request
//! and response DTOs shared with the HTTP layer.

pub mod dto;
pub mod services;

pub use services::{
    AchievementService, AdminAuthService, BoardMemberService, FeaturedService, HomeService,
    MediaService, MembershipService, ProjectService, SectionContent, SectionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SettingsService,
};
