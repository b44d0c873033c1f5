//! Password auth client

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use leo_core::entities::Session;
use leo_core::traits::{AuthProvider, RepoResult};
use leo_core::DomainError;

use crate::client::PlatformClient;
use crate::error::PlatformError;

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: UserResponse,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)));

        Session {
            user_id: self.user.id,
            email: self.user.email,
            access_token: self.access_token,
            expires_at,
        }
    }
}

/// [`AuthProvider`] backed by the platform auth API
#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    client: PlatformClient,
}

impl SupabaseAuth {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

fn request_failed(e: reqwest::Error) -> DomainError {
    DomainError::AuthProviderError(e.to_string())
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    #[instrument(skip(self, password))]
    async fn sign_in_with_password(&self, email: &str, password: &str) -> RepoResult<Session> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/token?grant_type=password")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(request_failed)?;

        let token: TokenResponse = PlatformClient::parse_response(response)
            .await
            .map_err(PlatformError::into_auth_error)?;

        let session = token.into_session();
        info!(user_id = %session.user_id, "Password sign-in succeeded");
        Ok(session)
    }

    #[instrument(skip(self, access_token))]
    async fn sign_out(&self, access_token: &str) -> RepoResult<()> {
        let response = self
            .client
            .request_as(Method::POST, "/auth/v1/logout", access_token)
            .send()
            .await
            .map_err(request_failed)?;

        PlatformClient::check_status(response)
            .await
            .map_err(PlatformError::into_auth_error)
    }

    #[instrument(skip(self, access_token))]
    async fn get_user(&self, access_token: &str) -> RepoResult<Session> {
        let response = self
            .client
            .request_as(Method::GET, "/auth/v1/user", access_token)
            .send()
            .await
            .map_err(request_failed)?;

        let user: UserResponse = PlatformClient::parse_response(response)
            .await
            .map_err(PlatformError::into_auth_error)?;

        Ok(Session::new(user.id, user.email, access_token.to_string()))
    }
}
