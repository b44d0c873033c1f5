//! Homepage section and board member handlers
//!
//! Generic over the record type, so one set of handlers serves board members,
//! testimonials, FAQs, services, feature cards and portfolio images.

use axum::{extract::State, Json};
use leo_service::{SectionContent, SectionService};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extractors::{AdminSession, PathParam, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Active rows by display order
///
/// GET /{section}
pub async fn list_public<T>(State(state): State<AppState>) -> ApiResult<Json<Vec<T::Response>>>
where
    T: SectionContent,
    T::Response: Serialize,
{
    let service = SectionService::<T>::new(state.service_context());
    Ok(Json(service.list_public().await?))
}

/// Every row, inactive ones included
///
/// GET /admin/{section}
pub async fn list_admin<T>(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> ApiResult<Json<Vec<T::Response>>>
where
    T: SectionContent,
    T::Response: Serialize,
{
    let service = SectionService::<T>::new(state.service_context());
    Ok(Json(service.list_admin(&session).await?))
}

/// POST /admin/{section}
pub async fn create<T>(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ValidatedJson(request): ValidatedJson<T::Create>,
) -> ApiResult<Created<Json<T::Response>>>
where
    T: SectionContent,
    T::Create: DeserializeOwned + Validate,
    T::Response: Serialize,
{
    let service = SectionService::<T>::new(state.service_context());
    let response = service.create(&session, request).await?;
    Ok(Created(Json(response)))
}

/// PATCH /admin/{section}/{id}
pub async fn update<T>(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
    ValidatedJson(request): ValidatedJson<T::Update>,
) -> ApiResult<Json<T::Response>>
where
    T: SectionContent,
    T::Update: DeserializeOwned + Validate,
    T::Response: Serialize,
{
    let service = SectionService::<T>::new(state.service_context());
    Ok(Json(service.update(&session, id, request).await?))
}

/// DELETE /admin/{section}/{id}
pub async fn delete<T>(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    PathParam(id): PathParam<Uuid>,
) -> ApiResult<NoContent>
where
    T: SectionContent,
{
    let service = SectionService::<T>::new(state.service_context());
    service.delete(&session, id).await?;
    Ok(NoContent)
}
