//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AdminLoginRequest, CreateAchievementRequest, CreateBoardMemberRequest, CreateFaqRequest,
    CreateFeatureCardRequest, CreatePortfolioImageRequest, CreateProjectRequest,
    CreateServiceRequest, CreateTestimonialRequest, DeleteImageRequest, ProjectFolderRequest,
    ReviewApplicationRequest, SubmitApplicationRequest, UpdateAchievementRequest,
    UpdateBoardMemberRequest, UpdateFaqRequest, UpdateFeatureCardRequest, UpdateFeaturedRequest,
    UpdatePortfolioImageRequest, UpdateProjectRequest, UpdateServiceRequest,
    UpdateTestimonialRequest, UploadImageRequest, UpsertSettingRequest,
};

pub use responses::{
    AchievementPageResponse, AchievementResponse, AdminSessionResponse, AdminUserResponse,
    ApplicationReceiptResponse, ApplicationResponse, BoardMemberResponse,
    DeleteImageResponse, FaqResponse, FeatureCardResponse, FeaturedAchievementResponse,
    FeaturedProjectResponse, HealthChecks, HealthResponse, LandingPageResponse,
    PortfolioImageResponse, ProjectFolderResponse, ProjectResponse, ReadinessResponse,
    ServiceOfferingResponse, SettingsMapResponse, SiteSettingResponse, TestimonialResponse,
    UploadedImageResponse,
};
