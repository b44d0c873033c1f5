//! Image upload handlers

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use leo_service::dto::{
    DeleteImageRequest, DeleteImageResponse, ProjectFolderRequest, ProjectFolderResponse,
};
use leo_service::MediaService;

use crate::extractors::{AdminSession, ImageUpload, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Upload one image (responds with `{url, path}`) or several (an array)
///
/// POST /admin/media
pub async fn upload_images(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    upload: ImageUpload,
) -> ApiResult<Response> {
    let service = MediaService::new(state.service_context());
    let mut requests = upload.into_requests();

    if requests.len() == 1 {
        if let Some(request) = requests.pop() {
            let uploaded = service.upload_image(&session, request).await?;
            return Ok(Created(Json(uploaded)).into_response());
        }
    }

    let uploaded = service.upload_images(&session, requests).await?;
    Ok(Created(Json(uploaded)).into_response())
}

/// Remove an image by its public URL
///
/// DELETE /admin/media
pub async fn delete_image(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ValidatedJson(request): ValidatedJson<DeleteImageRequest>,
) -> ApiResult<Json<DeleteImageResponse>> {
    let service = MediaService::new(state.service_context());
    let deleted = service.delete_image(&session, &request.url).await?;
    Ok(Json(DeleteImageResponse { deleted }))
}

/// Storage folder name for a project's images
///
/// POST /admin/media/project-folder
pub async fn project_folder(
    AdminSession(_session): AdminSession,
    ValidatedJson(request): ValidatedJson<ProjectFolderRequest>,
) -> Json<ProjectFolderResponse> {
    Json(MediaService::project_folder(&request))
}
