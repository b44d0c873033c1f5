//! Project service
//!
//! Public project listings and admin project management.

use leo_core::value_objects::is_known_category;
use leo_core::{DomainError, Project, Session, PROJECT_CATEGORIES};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::text::{clean_lines, optional_text, trimmed};

/// Project service
pub struct ProjectService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProjectService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The fixed category labels offered by the admin form
    pub fn categories() -> &'static [&'static str] {
        &PROJECT_CATEGORIES
    }

    #[instrument(skip(self))]
    pub async fn list_public(&self) -> ServiceResult<Vec<ProjectResponse>> {
        let projects = self.ctx.project_repo().list().await?;
        Ok(projects.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_public(&self, id: Uuid) -> ServiceResult<ProjectResponse> {
        let project = self
            .ctx
            .project_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProjectNotFound(id))?;
        Ok(project.into())
    }

    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_admin(&self, session: &Session) -> ServiceResult<Vec<ProjectResponse>> {
        self.ctx.authorize_admin(session)?;
        self.list_public().await
    }

    /// Create a project. New projects start unfeatured with display order 0;
    /// `date_text` is derived from the completion date.
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateProjectRequest,
    ) -> ServiceResult<ProjectResponse> {
        self.ctx.authorize_admin(session)?;

        let category = normalize_category(request.category)?;
        let mut project = Project::new(
            trimmed(&request.title),
            request.description,
            trimmed(&request.image_url),
            request.completion_date,
        );
        project.category = category;
        project.gallery_images = clean_lines(request.gallery_images);
        project.project_ref = optional_text(request.project_ref);

        self.ctx.project_repo().create(&project).await?;

        info!(project_id = %project.id, "Project created");
        Ok(project.into())
    }

    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn update(
        &self,
        session: &Session,
        id: Uuid,
        request: UpdateProjectRequest,
    ) -> ServiceResult<ProjectResponse> {
        self.ctx.authorize_admin(session)?;

        let mut project = self
            .ctx
            .project_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProjectNotFound(id))?;

        if let Some(title) = request.title {
            project.title = trimmed(&title);
        }
        if let Some(description) = request.description {
            project.description = description;
        }
        if request.category.is_some() {
            project.category = normalize_category(request.category)?;
        }
        if let Some(image_url) = request.image_url {
            project.image_url = trimmed(&image_url);
        }
        if let Some(gallery) = request.gallery_images {
            project.gallery_images = clean_lines(gallery);
        }
        if let Some(date) = request.completion_date {
            project.set_completion_date(date);
        }
        if let Some(is_featured) = request.is_featured {
            project.is_featured = is_featured;
        }
        if let Some(order) = request.display_order {
            project.display_order = order;
        }
        if request.project_ref.is_some() {
            project.project_ref = optional_text(request.project_ref);
        }

        self.ctx.project_repo().update(&project).await?;

        info!(project_id = %id, "Project updated");
        Ok(project.into())
    }

    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete(&self, session: &Session, id: Uuid) -> ServiceResult<()> {
        self.ctx.authorize_admin(session)?;
        self.ctx.project_repo().delete(id).await?;
        info!(project_id = %id, "Project deleted");
        Ok(())
    }
}

/// Blank means uncategorized; anything else must be a known label
fn normalize_category(category: Option<String>) -> ServiceResult<Option<String>> {
    match optional_text(category) {
        None => Ok(None),
        Some(c) if is_known_category(&c) => Ok(Some(c)),
        Some(c) => Err(ServiceError::validation(format!(
            "Unknown project category: {c}"
        ))),
    }
}
