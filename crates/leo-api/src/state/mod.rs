//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration and the access-token verifier.

use std::sync::Arc;

use leo_common::{AppConfig, TokenVerifier};
use leo_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    token_verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Create a new AppState; tokens are verified with the project JWT secret
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let token_verifier = TokenVerifier::new(&config.supabase.jwt_secret);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            token_verifier: Arc::new(token_verifier),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn token_verifier(&self) -> &TokenVerifier {
        &self.token_verifier
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
