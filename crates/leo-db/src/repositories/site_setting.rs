//! PostgreSQL implementation of SiteSettingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use leo_core::entities::SiteSetting;
use leo_core::traits::{RepoResult, SiteSettingRepository};

use crate::models::SiteSettingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SiteSettingRepository
#[derive(Clone)]
pub struct PgSiteSettingRepository {
    pool: PgPool,
}

impl PgSiteSettingRepository {
    /// Create a new PgSiteSettingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SiteSettingRepository for PgSiteSettingRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<SiteSetting>> {
        let result = sqlx::query_as::<_, SiteSettingModel>(
            r"
            SELECT key, value, description, updated_at
            FROM site_settings
            WHERE key = $1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SiteSetting::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<SiteSetting>> {
        let results = sqlx::query_as::<_, SiteSettingModel>(
            r"
            SELECT key, value, description, updated_at
            FROM site_settings
            ORDER BY key ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SiteSetting::from).collect())
    }

    #[instrument(skip(self, setting), fields(key = %setting.key))]
    async fn upsert(&self, setting: &SiteSetting) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO site_settings (key, value, description, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value,
                description = COALESCE(EXCLUDED.description, site_settings.description),
                updated_at = NOW()
            ",
        )
        .bind(&setting.key)
        .bind(&setting.value)
        .bind(&setting.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
