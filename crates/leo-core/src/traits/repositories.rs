//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Achievement, ContentRecord, FeaturedAchievement, FeaturedProject, MembershipApplication,
    Project, SiteSetting,
};
use crate::error::DomainError;
use crate::value_objects::ApplicationStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Project Repository
// ============================================================================

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, newest reference first (unreferenced last), then newest created
    async fn list(&self) -> RepoResult<Vec<Project>>;

    /// Find project by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>>;

    /// Insert a project
    async fn create(&self, project: &Project) -> RepoResult<()>;

    /// Update an existing project
    async fn update(&self, project: &Project) -> RepoResult<()>;

    /// Delete a project
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Delete every project, returning how many rows were removed
    async fn delete_all(&self) -> RepoResult<u64>;

    /// Number of stored projects
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Achievement Repository
// ============================================================================

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// All achievements by display order, then newest first
    async fn list(&self) -> RepoResult<Vec<Achievement>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Achievement>>;

    async fn create(&self, achievement: &Achievement) -> RepoResult<()>;

    async fn update(&self, achievement: &Achievement) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Content Repository (board members and homepage sections)
// ============================================================================

#[async_trait]
pub trait ContentRepository<T: ContentRecord>: Send + Sync {
    /// Active records by display order
    async fn list_active(&self) -> RepoResult<Vec<T>>;

    /// All records by display order
    async fn list_all(&self) -> RepoResult<Vec<T>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<T>>;

    async fn create(&self, record: &T) -> RepoResult<()>;

    async fn update(&self, record: &T) -> RepoResult<()>;

    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Delete every record, returning how many rows were removed
    async fn delete_all(&self) -> RepoResult<u64>;
}

// ============================================================================
// Site Setting Repository
// ============================================================================

#[async_trait]
pub trait SiteSettingRepository: Send + Sync {
    async fn get(&self, key: &str) -> RepoResult<Option<SiteSetting>>;

    /// All settings ordered by key
    async fn list(&self) -> RepoResult<Vec<SiteSetting>>;

    /// Insert or replace the setting stored under `setting.key`
    async fn upsert(&self, setting: &SiteSetting) -> RepoResult<()>;
}

// ============================================================================
// Membership Application Repository
// ============================================================================

#[async_trait]
pub trait MembershipApplicationRepository: Send + Sync {
    async fn create(&self, application: &MembershipApplication) -> RepoResult<()>;

    /// All applications, newest first
    async fn list(&self) -> RepoResult<Vec<MembershipApplication>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MembershipApplication>>;

    /// Store a review decision and return the updated application
    async fn update_review(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        admin_notes: Option<&str>,
        reviewer_email: &str,
    ) -> RepoResult<MembershipApplication>;
}

// ============================================================================
// Featured Repository
// ============================================================================

#[async_trait]
pub trait FeaturedRepository: Send + Sync {
    /// Featured projects in featured order
    async fn list_projects(&self) -> RepoResult<Vec<FeaturedProject>>;

    /// Featured achievements in featured order
    async fn list_achievements(&self) -> RepoResult<Vec<FeaturedAchievement>>;

    /// Replace the featured projects; position in `ids` becomes the order
    async fn replace_projects(&self, ids: &[Uuid]) -> RepoResult<()>;

    /// Replace the featured achievements; position in `ids` becomes the order
    async fn replace_achievements(&self, ids: &[Uuid]) -> RepoResult<()>;
}
