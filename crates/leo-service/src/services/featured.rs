//! Homepage featured lists
//!
//! The landing page shows up to five featured projects and three featured
//! achievements. Updates replace the whole list; the position of an id in
//! the request becomes its display order.

use std::collections::HashSet;

use leo_core::{Session, MAX_FEATURED_ACHIEVEMENTS, MAX_FEATURED_PROJECTS};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{FeaturedAchievementResponse, FeaturedProjectResponse, UpdateFeaturedRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Featured list service
pub struct FeaturedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeaturedService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> ServiceResult<Vec<FeaturedProjectResponse>> {
        let featured = self.ctx.featured_repo().list_projects().await?;
        Ok(featured.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_achievements(&self) -> ServiceResult<Vec<FeaturedAchievementResponse>> {
        let featured = self.ctx.featured_repo().list_achievements().await?;
        Ok(featured.into_iter().map(Into::into).collect())
    }

    /// Replace the featured projects
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id, count = request.ids.len()))]
    pub async fn update_projects(
        &self,
        session: &Session,
        request: UpdateFeaturedRequest,
    ) -> ServiceResult<Vec<FeaturedProjectResponse>> {
        self.ctx.authorize_admin(session)?;
        check_featured_ids(&request.ids, "projects", MAX_FEATURED_PROJECTS)?;

        self.ctx.featured_repo().replace_projects(&request.ids).await?;

        info!("Featured projects replaced");
        self.list_projects().await
    }

    /// Replace the featured achievements
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id, count = request.ids.len()))]
    pub async fn update_achievements(
        &self,
        session: &Session,
        request: UpdateFeaturedRequest,
    ) -> ServiceResult<Vec<FeaturedAchievementResponse>> {
        self.ctx.authorize_admin(session)?;
        check_featured_ids(&request.ids, "achievements", MAX_FEATURED_ACHIEVEMENTS)?;

        self.ctx
            .featured_repo()
            .replace_achievements(&request.ids)
            .await?;

        info!("Featured achievements replaced");
        self.list_achievements().await
    }
}

/// Reject over-long or repeating id lists before anything is replaced
fn check_featured_ids(ids: &[Uuid], kind: &'static str, max: usize) -> ServiceResult<()> {
    if ids.len() > max {
        return Err(leo_core::DomainError::FeaturedLimitExceeded { kind, max }.into());
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(ServiceError::validation(format!(
            "Featured {kind} contain {dup} more than once"
        )));
    }

    Ok(())
}
