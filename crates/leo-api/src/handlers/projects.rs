//! Project handlers
//!
//! Public project listing and the admin project editor.

use axum::{extract::State, Json};
use leo_service::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use leo_service::ProjectService;
use uuid::Uuid;

use crate::extractors::{AdminSession, PathParam, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let service = ProjectService::new(state.service_context());
    Ok(Json(service.list_public().await?))
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> ApiResult<Json<ProjectResponse>> {
    let service = ProjectService::new(state.service_context());
    Ok(Json(service.get_public(id).await?))
}

/// Category labels the project form offers
///
/// GET /project-categories
pub async fn list_categories() -> Json<&'static [&'static str]> {
    Json(ProjectService::categories())
}

/// GET /admin/projects
pub async fn admin_list_projects(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let service = ProjectService::new(state.service_context());
    Ok(Json(service.list_admin(&session).await?))
}

/// POST /admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
) -> ApiResult<Created<Json<ProjectResponse>>> {
    let service = ProjectService::new(state.service_context());
    let response = service.create(&session, request).await?;
    Ok(Created(Json(response)))
}

/// PATCH /admin/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let service = ProjectService::new(state.service_context());
    Ok(Json(service.update(&session, id, request).await?))
}

/// DELETE /admin/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
) -> ApiResult<NoContent> {
    let service = ProjectService::new(state.service_context());
    service.delete(&session, id).await?;
    Ok(NoContent)
}
