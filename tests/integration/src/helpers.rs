//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use leo_api::{create_app, AppState};
use leo_common::{
    AdminConfig, AppConfig, AppSettings, CorsConfig, Environment, RateLimitConfig, ServerConfig,
    StorageConfig, SupabaseConfig, TokenVerifier,
};
use leo_core::traits::{AuthProvider, RepoResult};
use leo_core::{DomainError, Session};
use leo_db::{create_pool, run_migrations};
use leo_platform::MemoryStorage;
use leo_service::ServiceContextBuilder;
use reqwest::{multipart::Form, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret-with-32-plus-chars";
pub const ADMIN_EMAIL: &str = "admin@leoparadise.org";
pub const ADMIN_PASSWORD: &str = "correct-horse";
pub const MEMBER_EMAIL: &str = "member@leoparadise.org";
pub const STORAGE_URL: &str = "https://demo.supabase.co";
pub const BUCKET: &str = "images";

/// Password sign-in that accepts any account with [`ADMIN_PASSWORD`] and
/// hands out real signed tokens
pub struct FakeAuth {
    tokens: TokenVerifier,
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> RepoResult<Session> {
        if password != ADMIN_PASSWORD {
            return Err(DomainError::InvalidCredentials(
                "Invalid login credentials".into(),
            ));
        }
        let user_id = Uuid::new_v4();
        let token = self
            .tokens
            .issue(user_id, Some(email), chrono::Duration::hours(1))
            .map_err(|e| DomainError::AuthProviderError(e.to_string()))?;
        Ok(Session::new(user_id, Some(email.to_string()), token))
    }

    async fn sign_out(&self, _access_token: &str) -> RepoResult<()> {
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> RepoResult<Session> {
        self.tokens
            .verify(access_token)
            .map_err(|e| DomainError::InvalidCredentials(e.to_string()))
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub storage: MemoryStorage,
    tokens: TokenVerifier,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let db_config = leo_db::DatabaseConfig::with_url(&config.database.url);
        let pool = create_pool(&db_config).await?;
        let migrations = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../crates/leo-db/migrations");
        run_migrations(&pool, &migrations).await?;

        let tokens = TokenVerifier::new(TEST_JWT_SECRET);
        let storage = MemoryStorage::new(STORAGE_URL, BUCKET);

        let context = ServiceContextBuilder::new()
            .postgres(pool)
            .storage(Arc::new(storage.clone()))
            .auth(Arc::new(FakeAuth {
                tokens: tokens.clone(),
            }))
            .admin_policy(config.admin.policy())
            .media(config.storage.clone())
            .build()?;

        let app = create_app(AppState::new(context, config));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            storage,
            tokens,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Access token of the configured admin account
    pub fn admin_token(&self) -> String {
        self.token_for(Some(ADMIN_EMAIL))
    }

    /// Access token of a signed-in account that is not the admin
    pub fn member_token(&self) -> String {
        self.token_for(Some(MEMBER_EMAIL))
    }

    /// Access token signed by someone else
    pub fn forged_token(&self) -> String {
        TokenVerifier::new("not-the-project-secret-but-long-enough")
            .issue(Uuid::new_v4(), Some(ADMIN_EMAIL), chrono::Duration::hours(1))
            .unwrap_or_default()
    }

    fn token_for(&self, email: Option<&str>) -> String {
        self.tokens
            .issue(Uuid::new_v4(), email, chrono::Duration::hours(1))
            .unwrap_or_default()
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a multipart POST request with auth token
    pub async fn post_form_auth(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token and JSON body
    pub async fn delete_json_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }
}

/// Test configuration: the database from `DATABASE_URL`, everything else fixed
pub fn test_config() -> Result<AppConfig> {
    let url = std::env::var("DATABASE_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "leo-api-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: leo_common::DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        },
        supabase: SupabaseConfig {
            url: STORAGE_URL.to_string(),
            anon_key: "test-anon-key".to_string(),
            service_role_key: None,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            bucket: BUCKET.to_string(),
        },
        admin: AdminConfig {
            email: ADMIN_EMAIL.to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        storage: StorageConfig {
            max_image_size_mb: 1,
            cache_control_secs: 3600,
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: crate::fixtures::ErrorResponse = assert_json(response, expected_status).await?;
    Ok(body.error.code)
}
