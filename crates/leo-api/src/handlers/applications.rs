//! Membership application handlers

use axum::{extract::State, Json};
use leo_service::dto::{
    ApplicationReceiptResponse, ApplicationResponse, ReviewApplicationRequest,
    SubmitApplicationRequest,
};
use leo_service::MembershipService;
use uuid::Uuid;

use crate::extractors::{AdminSession, PathParam, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Join form submission
///
/// POST /applications
pub async fn submit_application(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitApplicationRequest>,
) -> ApiResult<Created<Json<ApplicationReceiptResponse>>> {
    let service = MembershipService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}

/// GET /admin/applications
pub async fn list_applications(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let service = MembershipService::new(state.service_context());
    Ok(Json(service.list(&session).await?))
}

/// PATCH /admin/applications/{id}
pub async fn review_application(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<ReviewApplicationRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = MembershipService::new(state.service_context());
    Ok(Json(service.review(&session, id, request).await?))
}
