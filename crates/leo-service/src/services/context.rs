//! Service context - dependency container for services
//!
//! Holds the repositories, the platform clients and the admin policy.

use std::sync::Arc;

use leo_common::StorageConfig;
use leo_core::entities::{
    BoardMember, Faq, FeatureCard, PortfolioImage, ServiceOffering, Testimonial,
};
use leo_core::traits::{
    AchievementRepository, AuthProvider, ContentRepository, FeaturedRepository,
    MembershipApplicationRepository, ObjectStorage, ProjectRepository, SiteSettingRepository,
};
use leo_core::{AdminIdentity, AdminPolicy, Session};
use leo_db::PgPool;
use tracing::warn;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Services borrow it for the duration of a call. It provides access to:
/// - one repository per table
/// - the object storage bucket and the auth provider
/// - the admin policy and the media limits
/// - the database pool, when there is one, for readiness checks
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    // Repositories
    project_repo: Arc<dyn ProjectRepository>,
    achievement_repo: Arc<dyn AchievementRepository>,
    board_member_repo: Arc<dyn ContentRepository<BoardMember>>,
    testimonial_repo: Arc<dyn ContentRepository<Testimonial>>,
    faq_repo: Arc<dyn ContentRepository<Faq>>,
    service_repo: Arc<dyn ContentRepository<ServiceOffering>>,
    feature_card_repo: Arc<dyn ContentRepository<FeatureCard>>,
    portfolio_image_repo: Arc<dyn ContentRepository<PortfolioImage>>,
    setting_repo: Arc<dyn SiteSettingRepository>,
    application_repo: Arc<dyn MembershipApplicationRepository>,
    featured_repo: Arc<dyn FeaturedRepository>,

    // Platform
    storage: Arc<dyn ObjectStorage>,
    auth: Arc<dyn AuthProvider>,

    admin_policy: AdminPolicy,
    media: StorageConfig,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// The PostgreSQL pool, absent when running on in-memory repositories
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn project_repo(&self) -> &dyn ProjectRepository {
        self.project_repo.as_ref()
    }

    pub fn achievement_repo(&self) -> &dyn AchievementRepository {
        self.achievement_repo.as_ref()
    }

    pub fn board_member_repo(&self) -> &dyn ContentRepository<BoardMember> {
        self.board_member_repo.as_ref()
    }

    pub fn testimonial_repo(&self) -> &dyn ContentRepository<Testimonial> {
        self.testimonial_repo.as_ref()
    }

    pub fn faq_repo(&self) -> &dyn ContentRepository<Faq> {
        self.faq_repo.as_ref()
    }

    pub fn service_repo(&self) -> &dyn ContentRepository<ServiceOffering> {
        self.service_repo.as_ref()
    }

    pub fn feature_card_repo(&self) -> &dyn ContentRepository<FeatureCard> {
        self.feature_card_repo.as_ref()
    }

    pub fn portfolio_image_repo(&self) -> &dyn ContentRepository<PortfolioImage> {
        self.portfolio_image_repo.as_ref()
    }

    pub fn setting_repo(&self) -> &dyn SiteSettingRepository {
        self.setting_repo.as_ref()
    }

    pub fn application_repo(&self) -> &dyn MembershipApplicationRepository {
        self.application_repo.as_ref()
    }

    pub fn featured_repo(&self) -> &dyn FeaturedRepository {
        self.featured_repo.as_ref()
    }

    // === Platform ===

    /// The image bucket
    pub fn storage(&self) -> &dyn ObjectStorage {
        self.storage.as_ref()
    }

    /// The hosted auth provider
    pub fn auth(&self) -> &dyn AuthProvider {
        self.auth.as_ref()
    }

    // === Policy ===

    pub fn admin_policy(&self) -> &AdminPolicy {
        &self.admin_policy
    }

    /// Admin guard. Runs before any repository or storage call of a
    /// privileged operation.
    pub fn authorize_admin(&self, session: &Session) -> ServiceResult<AdminIdentity> {
        self.admin_policy.authorize(Some(session)).map_err(|e| {
            warn!(user_id = %session.user_id, error = %e, "Admin check rejected");
            ServiceError::from(e)
        })
    }

    /// Upload limits and cache settings
    pub fn media(&self) -> &StorageConfig {
        &self.media
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("admin_email", &self.admin_policy.admin_email())
            .field("media", &self.media)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    project_repo: Option<Arc<dyn ProjectRepository>>,
    achievement_repo: Option<Arc<dyn AchievementRepository>>,
    board_member_repo: Option<Arc<dyn ContentRepository<BoardMember>>>,
    testimonial_repo: Option<Arc<dyn ContentRepository<Testimonial>>>,
    faq_repo: Option<Arc<dyn ContentRepository<Faq>>>,
    service_repo: Option<Arc<dyn ContentRepository<ServiceOffering>>>,
    feature_card_repo: Option<Arc<dyn ContentRepository<FeatureCard>>>,
    portfolio_image_repo: Option<Arc<dyn ContentRepository<PortfolioImage>>>,
    setting_repo: Option<Arc<dyn SiteSettingRepository>>,
    application_repo: Option<Arc<dyn MembershipApplicationRepository>>,
    featured_repo: Option<Arc<dyn FeaturedRepository>>,
    storage: Option<Arc<dyn ObjectStorage>>,
    auth: Option<Arc<dyn AuthProvider>>,
    admin_policy: Option<AdminPolicy>,
    media: Option<StorageConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn project_repo(mut self, repo: Arc<dyn ProjectRepository>) -> Self {
        self.project_repo = Some(repo);
        self
    }

    pub fn achievement_repo(mut self, repo: Arc<dyn AchievementRepository>) -> Self {
        self.achievement_repo = Some(repo);
        self
    }

    pub fn board_member_repo(mut self, repo: Arc<dyn ContentRepository<BoardMember>>) -> Self {
        self.board_member_repo = Some(repo);
        self
    }

    pub fn testimonial_repo(mut self, repo: Arc<dyn ContentRepository<Testimonial>>) -> Self {
        self.testimonial_repo = Some(repo);
        self
    }

    pub fn faq_repo(mut self, repo: Arc<dyn ContentRepository<Faq>>) -> Self {
        self.faq_repo = Some(repo);
        self
    }

    pub fn service_repo(mut self, repo: Arc<dyn ContentRepository<ServiceOffering>>) -> Self {
        self.service_repo = Some(repo);
        self
    }

    pub fn feature_card_repo(mut self, repo: Arc<dyn ContentRepository<FeatureCard>>) -> Self {
        self.feature_card_repo = Some(repo);
        self
    }

    pub fn portfolio_image_repo(
        mut self,
        repo: Arc<dyn ContentRepository<PortfolioImage>>,
    ) -> Self {
        self.portfolio_image_repo = Some(repo);
        self
    }

    pub fn setting_repo(mut self, repo: Arc<dyn SiteSettingRepository>) -> Self {
        self.setting_repo = Some(repo);
        self
    }

    pub fn application_repo(mut self, repo: Arc<dyn MembershipApplicationRepository>) -> Self {
        self.application_repo = Some(repo);
        self
    }

    pub fn featured_repo(mut self, repo: Arc<dyn FeaturedRepository>) -> Self {
        self.featured_repo = Some(repo);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn admin_policy(mut self, policy: AdminPolicy) -> Self {
        self.admin_policy = Some(policy);
        self
    }

    /// Upload limits; defaults to [`StorageConfig::default`]
    pub fn media(mut self, media: StorageConfig) -> Self {
        self.media = Some(media);
        self
    }

    /// Wire every `Pg*Repository` to `pool`
    pub fn postgres(self, pool: PgPool) -> Self {
        use leo_db::{
            PgAchievementRepository, PgBoardMemberRepository, PgFaqRepository,
            PgFeatureCardRepository, PgFeaturedRepository, PgMembershipApplicationRepository,
            PgPortfolioImageRepository, PgProjectRepository, PgServiceOfferingRepository,
            PgSiteSettingRepository, PgTestimonialRepository,
        };

        self.project_repo(Arc::new(PgProjectRepository::new(pool.clone())))
            .achievement_repo(Arc::new(PgAchievementRepository::new(pool.clone())))
            .board_member_repo(Arc::new(PgBoardMemberRepository::new(pool.clone())))
            .testimonial_repo(Arc::new(PgTestimonialRepository::new(pool.clone())))
            .faq_repo(Arc::new(PgFaqRepository::new(pool.clone())))
            .service_repo(Arc::new(PgServiceOfferingRepository::new(pool.clone())))
            .feature_card_repo(Arc::new(PgFeatureCardRepository::new(pool.clone())))
            .portfolio_image_repo(Arc::new(PgPortfolioImageRepository::new(pool.clone())))
            .setting_repo(Arc::new(PgSiteSettingRepository::new(pool.clone())))
            .application_repo(Arc::new(PgMembershipApplicationRepository::new(pool.clone())))
            .featured_repo(Arc::new(PgFeaturedRepository::new(pool.clone())))
            .pool(pool)
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            project_repo: required(self.project_repo, "project_repo")?,
            achievement_repo: required(self.achievement_repo, "achievement_repo")?,
            board_member_repo: required(self.board_member_repo, "board_member_repo")?,
            testimonial_repo: required(self.testimonial_repo, "testimonial_repo")?,
            faq_repo: required(self.faq_repo, "faq_repo")?,
            service_repo: required(self.service_repo, "service_repo")?,
            feature_card_repo: required(self.feature_card_repo, "feature_card_repo")?,
            portfolio_image_repo: required(self.portfolio_image_repo, "portfolio_image_repo")?,
            setting_repo: required(self.setting_repo, "setting_repo")?,
            application_repo: required(self.application_repo, "application_repo")?,
            featured_repo: required(self.featured_repo, "featured_repo")?,
            storage: required(self.storage, "storage")?,
            auth: required(self.auth, "auth")?,
            admin_policy: required(self.admin_policy, "admin_policy")?,
            media: self.media.unwrap_or_default(),
        })
    }
}
