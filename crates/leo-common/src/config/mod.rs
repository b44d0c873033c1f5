//! Configuration structs

mod app_config;
mod env_file;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig, StorageConfig, SupabaseConfig,
};
pub use env_file::{CredentialOverrides, CredentialScope, Credentials, EnvFile, EnvSources};
