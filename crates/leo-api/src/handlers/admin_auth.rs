//! Admin authentication handlers

use axum::{extract::State, Json};
use leo_service::dto::{AdminLoginRequest, AdminSessionResponse, AdminUserResponse};
use leo_service::AdminAuthService;

use crate::extractors::{AdminSession, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Password sign-in, restricted to the admin account
///
/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> ApiResult<Json<AdminSessionResponse>> {
    let service = AdminAuthService::new(state.service_context());
    Ok(Json(service.sign_in(request).await?))
}

/// POST /admin/logout
pub async fn logout(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> ApiResult<NoContent> {
    let service = AdminAuthService::new(state.service_context());
    service.sign_out(&session).await?;
    Ok(NoContent)
}

/// The admin behind the bearer token
///
/// GET /admin/session
pub async fn current_session(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> ApiResult<Json<AdminUserResponse>> {
    let service = AdminAuthService::new(state.service_context());
    Ok(Json(service.current_admin(&session).await?))
}
