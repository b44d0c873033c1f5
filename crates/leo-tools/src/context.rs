//! Credentials and clients shared by the subcommands
//!
//! Missing credentials and failed connections are [`SetupError`]s; the binary
//! prints setup instructions for them and exits with status 1.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use leo_common::{ConfigError, CredentialOverrides, CredentialScope, Credentials, EnvSources};
use leo_core::ObjectStorage;
use leo_db::{create_pool, DatabaseConfig, PgPool};
use leo_platform::{MemoryStorage, PlatformClient, SupabaseStorage};

use crate::cli::GlobalArgs;

const BUCKET_VARS: [&str; 1] = ["STORAGE_BUCKET"];
const DEFAULT_BUCKET: &str = "images";
const DRY_RUN_URL: &str = "https://dry-run.invalid";

/// Errors that stop a tool before it does any work
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Missing credentials: {0}")]
    Credentials(#[from] ConfigError),

    #[error("Failed to connect to the database: {0}")]
    Database(String),
}

impl SetupError {
    /// Instructions printed after the error
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Credentials(ConfigError::MissingVar("SUPABASE_SERVICE_ROLE_KEY")) => {
                "This command needs the service-role key, which bypasses row level security.\n\
                 1. Open the platform dashboard: Settings > API\n\
                 2. Copy the \"service_role\" key (not the anon key)\n\
                 3. Add SUPABASE_SERVICE_ROLE_KEY=<key> to .env, or pass --service-key\n\
                 Never commit this key or ship it to the browser."
            }
            Self::Credentials(ConfigError::MissingVar("DATABASE_URL")) => {
                "Set DATABASE_URL in .env or pass --database-url."
            }
            Self::Credentials(_) => {
                "Required in .env:\n  SUPABASE_URL=https://<project>.supabase.co\n  SUPABASE_ANON_KEY=<anon key>\n\
                 or pass --url and --anon-key."
            }
            Self::Database(_) => "Check that the database is reachable and DATABASE_URL is correct.",
        }
    }
}

/// Resolved settings plus lazily built clients
pub struct ToolContext {
    overrides: CredentialOverrides,
    sources: EnvSources,
    bucket: String,
    dry_run: bool,
}

impl ToolContext {
    pub fn from_args(args: &GlobalArgs) -> Result<Self, SetupError> {
        let sources = EnvSources::load(&args.env_files)?;
        for file in sources.files() {
            info!(path = %file.path().display(), vars = file.len(), "Loaded env file");
        }

        let overrides = CredentialOverrides {
            url: args.url.clone(),
            anon_key: args.anon_key.clone(),
            service_key: args.service_key.clone(),
            database_url: args.database_url.clone(),
        };

        Ok(Self::new(overrides, sources, args.dry_run))
    }

    pub fn new(overrides: CredentialOverrides, sources: EnvSources, dry_run: bool) -> Self {
        let bucket = sources
            .get(&BUCKET_VARS)
            .unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        Self {
            overrides,
            sources,
            bucket,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Storage client for `scope`; an in-memory bucket on dry runs
    pub fn storage(&self, scope: CredentialScope) -> Result<Arc<dyn ObjectStorage>, SetupError> {
        if self.dry_run {
            let url = Credentials::resolve(scope, &self.overrides, &self.sources)
                .map_or_else(|_| DRY_RUN_URL.to_string(), |c| c.url);
            warn!(bucket = %self.bucket, "Dry run: uploads go to an in-memory bucket");
            return Ok(Arc::new(MemoryStorage::new(url, self.bucket.clone())));
        }

        let credentials = Credentials::resolve(scope, &self.overrides, &self.sources)?;
        info!(url = %credentials.url, scope = ?credentials.scope, "Platform client initialized");
        let client = PlatformClient::new(credentials.url, credentials.key);
        Ok(Arc::new(SupabaseStorage::new(client, self.bucket.clone())))
    }

    /// Connect to the database
    pub async fn pool(&self) -> Result<PgPool, SetupError> {
        let url = Credentials::database_url(&self.overrides, &self.sources)?;
        let pool = create_pool(&DatabaseConfig::with_url(url))
            .await
            .map_err(|e| SetupError::Database(e.to_string()))?;
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leo_common::EnvFile;

    fn sources(content: &str) -> EnvSources {
        EnvSources::isolated(vec![EnvFile::parse(".env", content.as_bytes()).unwrap()])
    }

    #[test]
    fn test_bucket_defaults_to_images() {
        let ctx = ToolContext::new(CredentialOverrides::default(), sources(""), false);
        assert_eq!(ctx.bucket(), "images");

        let ctx = ToolContext::new(
            CredentialOverrides::default(),
            sources("STORAGE_BUCKET=media\n"),
            false,
        );
        assert_eq!(ctx.bucket(), "media");
    }

    #[test]
    fn test_missing_service_key() {
        let ctx = ToolContext::new(
            CredentialOverrides::default(),
            sources("SUPABASE_URL=https://demo.supabase.co\nSUPABASE_ANON_KEY=anon\n"),
            false,
        );
        let err = ctx.storage(CredentialScope::ServiceRole).err().unwrap();
        assert!(err.instructions().contains("service_role"));
    }

    #[test]
    fn test_dry_run_needs_no_credentials() {
        let ctx = ToolContext::new(CredentialOverrides::default(), sources(""), true);
        let storage = ctx.storage(CredentialScope::ServiceRole).unwrap();
        assert_eq!(
            storage.public_url("members/a.jpg"),
            "https://dry-run.invalid/storage/v1/object/public/images/members/a.jpg"
        );
    }

    #[tokio::test]
    async fn test_missing_database_url() {
        let ctx = ToolContext::new(CredentialOverrides::default(), sources(""), false);
        let err = ctx.pool().await.err().unwrap();
        assert!(matches!(
            err,
            SetupError::Credentials(ConfigError::MissingVar("DATABASE_URL"))
        ));
    }
}
