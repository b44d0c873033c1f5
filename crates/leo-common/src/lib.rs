//! # leo-common
//!
//! Shared utilities including configuration, error handling, access-token
//! verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, TokenVerifier, AUTHENTICATED_AUDIENCE};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, CredentialOverrides,
    CredentialScope, Credentials, DatabaseConfig, EnvFile, EnvSources, Environment,
    RateLimitConfig, ServerConfig, StorageConfig, SupabaseConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
