//! Achievement service

use leo_core::{Achievement, DomainError, Session};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    AchievementPageResponse, AchievementResponse, CreateAchievementRequest,
    UpdateAchievementRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::text::{clean_lines, optional_text, trimmed};

/// Achievement service
pub struct AchievementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AchievementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All achievements by display order, newest first within an order
    #[instrument(skip(self))]
    pub async fn list_public(&self) -> ServiceResult<Vec<AchievementResponse>> {
        let achievements = self.ctx.achievement_repo().list().await?;
        Ok(achievements.into_iter().map(Into::into).collect())
    }

    /// Achievements grouped by category
    #[instrument(skip(self))]
    pub async fn page(&self) -> ServiceResult<AchievementPageResponse> {
        let achievements = self.ctx.achievement_repo().list().await?;
        Ok(achievements.into_iter().collect())
    }

    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_admin(&self, session: &Session) -> ServiceResult<Vec<AchievementResponse>> {
        self.ctx.authorize_admin(session)?;
        self.list_public().await
    }

    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateAchievementRequest,
    ) -> ServiceResult<AchievementResponse> {
        self.ctx.authorize_admin(session)?;

        let mut achievement = Achievement::new(
            request.category.unwrap_or_default(),
            trimmed(&request.title),
            clean_lines(request.details),
        );
        achievement.image_url = optional_text(request.image_url);
        achievement.image_alt = optional_text(request.image_alt);
        achievement.display_order = request.display_order.unwrap_or(0);

        self.ctx.achievement_repo().create(&achievement).await?;

        info!(achievement_id = %achievement.id, "Achievement created");
        Ok(achievement.into())
    }

    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn update(
        &self,
        session: &Session,
        id: Uuid,
        request: UpdateAchievementRequest,
    ) -> ServiceResult<AchievementResponse> {
        self.ctx.authorize_admin(session)?;

        let mut achievement = self
            .ctx
            .achievement_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AchievementNotFound(id))?;

        if let Some(category) = request.category {
            achievement.category = category;
        }
        if let Some(title) = request.title {
            achievement.title = trimmed(&title);
        }
        if let Some(details) = request.details {
            achievement.details = clean_lines(details);
        }
        if request.image_url.is_some() {
            achievement.image_url = optional_text(request.image_url);
        }
        if request.image_alt.is_some() {
            achievement.image_alt = optional_text(request.image_alt);
        }
        if let Some(order) = request.display_order {
            achievement.display_order = order;
        }

        self.ctx.achievement_repo().update(&achievement).await?;

        info!(achievement_id = %id, "Achievement updated");
        Ok(achievement.into())
    }

    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete(&self, session: &Session, id: Uuid) -> ServiceResult<()> {
        self.ctx.authorize_admin(session)?;
        self.ctx.achievement_repo().delete(id).await?;
        info!(achievement_id = %id, "Achievement deleted");
        Ok(())
    }
}
