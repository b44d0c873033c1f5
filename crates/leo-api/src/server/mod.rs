//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use leo_common::{AppConfig, AppError};
use leo_db::create_pool;
use leo_platform::{PlatformClient, SupabaseAuth, SupabaseStorage};
use leo_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_common_layers, apply_middleware};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api = apply_middleware(
        create_router(config.storage.max_image_bytes()),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_common_layers(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = leo_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Uploads need the elevated key; without it the bucket policies decide
    let storage_key = match &config.supabase.service_role_key {
        Some(key) => key.clone(),
        None => {
            warn!("SUPABASE_SERVICE_ROLE_KEY not set; storage calls use the anon key");
            config.supabase.anon_key.clone()
        }
    };
    let storage = SupabaseStorage::new(
        PlatformClient::new(&config.supabase.url, storage_key),
        &config.supabase.bucket,
    );
    let auth = SupabaseAuth::new(PlatformClient::new(
        &config.supabase.url,
        &config.supabase.anon_key,
    ));

    let service_context = ServiceContextBuilder::new()
        .postgres(pool)
        .storage(Arc::new(storage))
        .auth(Arc::new(auth))
        .admin_policy(config.admin.policy())
        .media(config.storage.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    info!(admin = %config.admin.email, "Admin account configured");

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
