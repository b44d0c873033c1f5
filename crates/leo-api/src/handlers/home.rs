//! Landing page handler

use axum::{extract::State, Json};
use leo_service::dto::LandingPageResponse;
use leo_service::HomeService;

use crate::state::AppState;

/// Everything the landing page shows, with failed sections left empty
///
/// GET /home
pub async fn landing_page(State(state): State<AppState>) -> Json<LandingPageResponse> {
    Json(HomeService::new(state.service_context()).landing_page().await)
}
