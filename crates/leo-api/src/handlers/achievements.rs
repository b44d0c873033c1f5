//! Achievement handlers

use axum::{extract::State, Json};
use leo_service::dto::{
    AchievementPageResponse, AchievementResponse, CreateAchievementRequest,
    UpdateAchievementRequest,
};
use leo_service::AchievementService;
use uuid::Uuid;

use crate::extractors::{AdminSession, PathParam, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /achievements
pub async fn list_achievements(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AchievementResponse>>> {
    let service = AchievementService::new(state.service_context());
    Ok(Json(service.list_public().await?))
}

/// Achievements grouped into the page's three sections
///
/// GET /achievements/page
pub async fn achievements_page(
    State(state): State<AppState>,
) -> ApiResult<Json<AchievementPageResponse>> {
    let service = AchievementService::new(state.service_context());
    Ok(Json(service.page().await?))
}

/// GET /admin/achievements
pub async fn admin_list_achievements(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> ApiResult<Json<Vec<AchievementResponse>>> {
    let service = AchievementService::new(state.service_context());
    Ok(Json(service.list_admin(&session).await?))
}

/// POST /admin/achievements
pub async fn create_achievement(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ValidatedJson(request): ValidatedJson<CreateAchievementRequest>,
) -> ApiResult<Created<Json<AchievementResponse>>> {
    let service = AchievementService::new(state.service_context());
    let response = service.create(&session, request).await?;
    Ok(Created(Json(response)))
}

/// PATCH /admin/achievements/{id}
pub async fn update_achievement(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateAchievementRequest>,
) -> ApiResult<Json<AchievementResponse>> {
    let service = AchievementService::new(state.service_context());
    Ok(Json(service.update(&session, id, request).await?))
}

/// DELETE /admin/achievements/{id}
pub async fn delete_achievement(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
) -> ApiResult<NoContent> {
    let service = AchievementService::new(state.service_context());
    service.delete(&session, id).await?;
    Ok(NoContent)
}
