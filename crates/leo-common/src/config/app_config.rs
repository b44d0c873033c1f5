//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use std::env;

use leo_core::AdminPolicy;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub supabase: SupabaseConfig,
    pub admin: AdminConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Hosted platform (auth + object storage) configuration
#[derive(Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://<ref>.supabase.co`
    pub url: String,
    pub anon_key: String,
    /// Elevated key; only the maintenance tools need it
    #[serde(default)]
    pub service_role_key: Option<String>,
    /// Secret the platform signs access tokens with
    pub jwt_secret: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("bucket", &self.bucket)
            .field("has_service_role_key", &self.service_role_key.is_some())
            .finish_non_exhaustive()
    }
}

/// The single admin account
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Stored lowercased
    pub email: String,
}

impl AdminConfig {
    #[must_use]
    pub fn policy(&self) -> AdminPolicy {
        AdminPolicy::new(&self.email)
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Image upload configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_max_image_size")]
    pub max_image_size_mb: u32,
    #[serde(default = "default_cache_control_secs")]
    pub cache_control_secs: u32,
}

impl StorageConfig {
    /// Upload limit in bytes
    #[must_use]
    pub fn max_image_bytes(&self) -> usize {
        self.max_image_size_mb as usize * 1024 * 1024
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_image_size_mb: default_max_image_size(),
            cache_control_secs: default_cache_control_secs(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "leo-paradise".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_bucket() -> String {
    "images".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_max_image_size() -> u32 {
    5
}

fn default_cache_control_secs() -> u32 {
    3600
}

/// First set, non-empty variable among `names`
fn var_any(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            supabase: SupabaseConfig {
                url: var_any(&["SUPABASE_URL", "VITE_SUPABASE_URL"])
                    .ok_or(ConfigError::MissingVar("SUPABASE_URL"))?,
                anon_key: var_any(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"])
                    .ok_or(ConfigError::MissingVar("SUPABASE_ANON_KEY"))?,
                service_role_key: var_any(&[
                    "SUPABASE_SERVICE_ROLE_KEY",
                    "VITE_SUPABASE_SERVICE_ROLE_KEY",
                ]),
                jwt_secret: env::var("SUPABASE_JWT_SECRET")
                    .map_err(|_| ConfigError::MissingVar("SUPABASE_JWT_SECRET"))?,
                bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| default_bucket()),
            },
            admin: AdminConfig {
                email: var_any(&["ADMIN_EMAIL", "VITE_ADMIN_EMAIL"])
                    .map(|e| e.trim().to_lowercase())
                    .ok_or(ConfigError::MissingVar("ADMIN_EMAIL"))?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                max_image_size_mb: parse_var("MAX_IMAGE_SIZE_MB")?
                    .unwrap_or_else(default_max_image_size),
                cache_control_secs: parse_var("STORAGE_CACHE_CONTROL_SECS")?
                    .unwrap_or_else(default_cache_control_secs),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to read {path}: {message}")]
    EnvFile { path: String, message: String },
}
