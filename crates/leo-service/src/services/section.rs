//! Homepage section and board member services
//!
//! Board members, testimonials, FAQs, services, feature cards and portfolio
//! images share one shape: an ordered list with an active flag, public reads
//! of the active rows and admin CRUD. [`SectionService`] implements that once;
//! each record type supplies its DTOs through [`SectionContent`].

use std::marker::PhantomData;

use chrono::Utc;
use leo_core::entities::{
    BoardMember, ContentRecord, Faq, FeatureCard, PortfolioImage, ServiceOffering, Testimonial,
};
use leo_core::traits::ContentRepository;
use leo_core::Session;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    BoardMemberResponse, CreateBoardMemberRequest, CreateFaqRequest, CreateFeatureCardRequest,
    CreatePortfolioImageRequest, CreateServiceRequest, CreateTestimonialRequest, FaqResponse,
    FeatureCardResponse, PortfolioImageResponse, ServiceOfferingResponse, TestimonialResponse,
    UpdateBoardMemberRequest, UpdateFaqRequest, UpdateFeatureCardRequest,
    UpdatePortfolioImageRequest, UpdateServiceRequest, UpdateTestimonialRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::text::{optional_text, trimmed};

/// A record type managed through [`SectionService`]
pub trait SectionContent: ContentRecord {
    type Create: Send;
    type Update: Send;
    type Response: From<Self> + Send;

    /// The repository holding this record type
    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self>;

    /// Build a new active record from a create request
    fn from_create(request: Self::Create) -> Self;

    /// Apply the fields present in an update request
    fn apply_update(&mut self, request: Self::Update);
}

/// CRUD service for one section record type
pub struct SectionService<'a, T> {
    ctx: &'a ServiceContext,
    _record: PhantomData<fn() -> T>,
}

/// Board member service
pub type BoardMemberService<'a> = SectionService<'a, BoardMember>;

impl<'a, T: SectionContent> SectionService<'a, T> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            _record: PhantomData,
        }
    }

    /// Active records by display order
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn list_public(&self) -> ServiceResult<Vec<T::Response>> {
        let records = T::repo(self.ctx).list_active().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Every record by display order, inactive ones included
    #[instrument(skip(self, session), fields(kind = T::KIND, user_id = %session.user_id))]
    pub async fn list_admin(&self, session: &Session) -> ServiceResult<Vec<T::Response>> {
        self.ctx.authorize_admin(session)?;
        let records = T::repo(self.ctx).list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, session, request), fields(kind = T::KIND, user_id = %session.user_id))]
    pub async fn create(&self, session: &Session, request: T::Create) -> ServiceResult<T::Response> {
        self.ctx.authorize_admin(session)?;

        let record = T::from_create(request);
        T::repo(self.ctx).create(&record).await?;

        info!(id = %record.id(), "{} created", T::KIND);
        Ok(record.into())
    }

    #[instrument(skip(self, session, request), fields(kind = T::KIND, user_id = %session.user_id))]
    pub async fn update(
        &self,
        session: &Session,
        id: Uuid,
        request: T::Update,
    ) -> ServiceResult<T::Response> {
        self.ctx.authorize_admin(session)?;

        let repo = T::repo(self.ctx);
        let mut record = repo.find_by_id(id).await?.ok_or_else(|| T::not_found(id))?;
        record.apply_update(request);
        repo.update(&record).await?;

        info!(id = %id, "{} updated", T::KIND);
        Ok(record.into())
    }

    #[instrument(skip(self, session), fields(kind = T::KIND, user_id = %session.user_id))]
    pub async fn delete(&self, session: &Session, id: Uuid) -> ServiceResult<()> {
        self.ctx.authorize_admin(session)?;
        T::repo(self.ctx).delete(id).await?;
        info!(id = %id, "{} deleted", T::KIND);
        Ok(())
    }
}

// ============================================================================
// Record types
// ============================================================================

impl SectionContent for BoardMember {
    type Create = CreateBoardMemberRequest;
    type Update = UpdateBoardMemberRequest;
    type Response = BoardMemberResponse;

    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self> {
        ctx.board_member_repo()
    }

    fn from_create(request: Self::Create) -> Self {
        let mut member = BoardMember::new(
            trimmed(&request.name),
            trimmed(&request.role),
            request.display_order.unwrap_or(0),
        );
        member.image_url = optional_text(request.image_url);
        member.bio = optional_text(request.bio);
        member.email = optional_text(request.email);
        member.linkedin = optional_text(request.linkedin);
        member
    }

    fn apply_update(&mut self, request: Self::Update) {
        if let Some(name) = request.name {
            self.name = trimmed(&name);
        }
        if let Some(role) = request.role {
            self.role = trimmed(&role);
        }
        if request.image_url.is_some() {
            self.image_url = optional_text(request.image_url);
        }
        if request.bio.is_some() {
            self.bio = optional_text(request.bio);
        }
        if request.email.is_some() {
            self.email = optional_text(request.email);
        }
        if request.linkedin.is_some() {
            self.linkedin = optional_text(request.linkedin);
        }
        if let Some(order) = request.display_order {
            self.display_order = order;
        }
        if let Some(active) = request.is_active {
            self.is_active = active;
        }
    }
}

impl SectionContent for Testimonial {
    type Create = CreateTestimonialRequest;
    type Update = UpdateTestimonialRequest;
    type Response = TestimonialResponse;

    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self> {
        ctx.testimonial_repo()
    }

    fn from_create(request: Self::Create) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: trimmed(&request.name),
            role: trimmed(&request.role),
            image_url: optional_text(request.image_url),
            quote: trimmed(&request.quote),
            display_order: request.display_order.unwrap_or(0),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn apply_update(&mut self, request: Self::Update) {
        if let Some(name) = request.name {
            self.name = trimmed(&name);
        }
        if let Some(role) = request.role {
            self.role = trimmed(&role);
        }
        if request.image_url.is_some() {
            self.image_url = optional_text(request.image_url);
        }
        if let Some(quote) = request.quote {
            self.quote = trimmed(&quote);
        }
        if let Some(order) = request.display_order {
            self.display_order = order;
        }
        if let Some(active) = request.is_active {
            self.is_active = active;
        }
    }
}

impl SectionContent for Faq {
    type Create = CreateFaqRequest;
    type Update = UpdateFaqRequest;
    type Response = FaqResponse;

    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self> {
        ctx.faq_repo()
    }

    fn from_create(request: Self::Create) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: trimmed(&request.question),
            answer: trimmed(&request.answer),
            display_order: request.display_order.unwrap_or(0),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn apply_update(&mut self, request: Self::Update) {
        if let Some(question) = request.question {
            self.question = trimmed(&question);
        }
        if let Some(answer) = request.answer {
            self.answer = trimmed(&answer);
        }
        if let Some(order) = request.display_order {
            self.display_order = order;
        }
        if let Some(active) = request.is_active {
            self.is_active = active;
        }
    }
}

impl SectionContent for ServiceOffering {
    type Create = CreateServiceRequest;
    type Update = UpdateServiceRequest;
    type Response = ServiceOfferingResponse;

    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self> {
        ctx.service_repo()
    }

    fn from_create(request: Self::Create) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: trimmed(&request.title),
            description: trimmed(&request.description),
            icon_name: trimmed(&request.icon_name),
            display_order: request.display_order.unwrap_or(0),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn apply_update(&mut self, request: Self::Update) {
        if let Some(title) = request.title {
            self.title = trimmed(&title);
        }
        if let Some(description) = request.description {
            self.description = trimmed(&description);
        }
        if let Some(icon) = request.icon_name {
            self.icon_name = trimmed(&icon);
        }
        if let Some(order) = request.display_order {
            self.display_order = order;
        }
        if let Some(active) = request.is_active {
            self.is_active = active;
        }
    }
}

impl SectionContent for FeatureCard {
    type Create = CreateFeatureCardRequest;
    type Update = UpdateFeatureCardRequest;
    type Response = FeatureCardResponse;

    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self> {
        ctx.feature_card_repo()
    }

    fn from_create(request: Self::Create) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: trimmed(&request.title),
            description: trimmed(&request.description),
            image_url: optional_text(request.image_url),
            image_alt: optional_text(request.image_alt),
            display_order: request.display_order.unwrap_or(0),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn apply_update(&mut self, request: Self::Update) {
        if let Some(title) = request.title {
            self.title = trimmed(&title);
        }
        if let Some(description) = request.description {
            self.description = trimmed(&description);
        }
        if request.image_url.is_some() {
            self.image_url = optional_text(request.image_url);
        }
        if request.image_alt.is_some() {
            self.image_alt = optional_text(request.image_alt);
        }
        if let Some(order) = request.display_order {
            self.display_order = order;
        }
        if let Some(active) = request.is_active {
            self.is_active = active;
        }
    }
}

impl SectionContent for PortfolioImage {
    type Create = CreatePortfolioImageRequest;
    type Update = UpdatePortfolioImageRequest;
    type Response = PortfolioImageResponse;

    fn repo(ctx: &ServiceContext) -> &dyn ContentRepository<Self> {
        ctx.portfolio_image_repo()
    }

    fn from_create(request: Self::Create) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url: trimmed(&request.image_url),
            image_alt: optional_text(request.image_alt),
            display_order: request.display_order.unwrap_or(0),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn apply_update(&mut self, request: Self::Update) {
        if let Some(url) = request.image_url {
            self.image_url = trimmed(&url);
        }
        if request.image_alt.is_some() {
            self.image_alt = optional_text(request.image_alt);
        }
        if let Some(order) = request.display_order {
            self.display_order = order;
        }
        if let Some(active) = request.is_active {
            self.is_active = active;
        }
    }
}
