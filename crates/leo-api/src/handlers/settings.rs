//! Site settings handlers

use axum::{extract::State, Json};
use leo_service::dto::{SettingsMapResponse, SiteSettingResponse, UpsertSettingRequest};
use leo_service::SettingsService;

use crate::extractors::{AdminSession, PathParam, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// All settings as a key → value map
///
/// GET /settings
pub async fn list_settings(State(state): State<AppState>) -> ApiResult<Json<SettingsMapResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// GET /settings/{key}
pub async fn get_setting(
    State(state): State<AppState>,
    PathParam(key): PathParam<String>,
) -> ApiResult<Json<SiteSettingResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.get(&key).await?))
}

/// PUT /admin/settings/{key}
pub async fn upsert_setting(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(key): PathParam<String>,
    ValidatedJson(request): ValidatedJson<UpsertSettingRequest>,
) -> ApiResult<Json<SiteSettingResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.upsert(&session, &key, request).await?))
}
