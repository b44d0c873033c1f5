//! Homepage featured list handlers

use axum::{extract::State, Json};
use leo_service::dto::{
    FeaturedAchievementResponse, FeaturedProjectResponse, UpdateFeaturedRequest,
};
use leo_service::FeaturedService;

use crate::extractors::{AdminSession, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /featured/projects
pub async fn list_featured_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FeaturedProjectResponse>>> {
    let service = FeaturedService::new(state.service_context());
    Ok(Json(service.list_projects().await?))
}

/// GET /featured/achievements
pub async fn list_featured_achievements(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FeaturedAchievementResponse>>> {
    let service = FeaturedService::new(state.service_context());
    Ok(Json(service.list_achievements().await?))
}

/// Replace the featured projects; request order is display order
///
/// PUT /admin/featured/projects
pub async fn update_featured_projects(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ValidatedJson(request): ValidatedJson<UpdateFeaturedRequest>,
) -> ApiResult<Json<Vec<FeaturedProjectResponse>>> {
    let service = FeaturedService::new(state.service_context());
    Ok(Json(service.update_projects(&session, request).await?))
}

/// PUT /admin/featured/achievements
pub async fn update_featured_achievements(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ValidatedJson(request): ValidatedJson<UpdateFeaturedRequest>,
) -> ApiResult<Json<Vec<FeaturedAchievementResponse>>> {
    let service = FeaturedService::new(state.service_context());
    Ok(Json(service.update_achievements(&session, request).await?))
}
