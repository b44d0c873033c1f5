//! Schema migrations

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Migrations shipped with this crate, relative to the workspace root
pub const DEFAULT_MIGRATIONS_DIR: &str = "crates/leo-db/migrations";

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<usize, MigrateError> {
    let migrator = Migrator::new(dir).await?;
    let total = migrator.iter().count();
    migrator.run(pool).await?;

    info!(dir = %dir.display(), total, "Migrations applied");
    Ok(total)
}
