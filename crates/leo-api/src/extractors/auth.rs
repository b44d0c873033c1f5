//! Authentication extractor
//!
//! Verifies the platform access token from the Authorization header and
//! turns it into a [`Session`]. Whether the session belongs to the admin is
//! decided by the services, not here.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use leo_core::Session;

use crate::response::ApiError;
use crate::state::AppState;

/// Session behind a verified bearer token
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let session = app_state
            .token_verifier()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::App(e)
            })?;

        Ok(AdminSession(session))
    }
}
