//! PostgreSQL implementation of AchievementRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use leo_core::entities::Achievement;
use leo_core::traits::{AchievementRepository, RepoResult};

use crate::models::AchievementModel;

use super::error::{achievement_not_found, map_db_error};

/// PostgreSQL implementation of AchievementRepository
#[derive(Clone)]
pub struct PgAchievementRepository {
    pool: PgPool,
}

impl PgAchievementRepository {
    /// Create a new PgAchievementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementRepository for PgAchievementRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Achievement>> {
        let results = sqlx::query_as::<_, AchievementModel>(
            r"
            SELECT id, category, title, details, image_url, image_alt, display_order, created_at
            FROM achievements
            ORDER BY display_order ASC, created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Achievement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Achievement>> {
        let result = sqlx::query_as::<_, AchievementModel>(
            r"
            SELECT id, category, title, details, image_url, image_alt, display_order, created_at
            FROM achievements
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Achievement::from))
    }

    #[instrument(skip(self, achievement), fields(achievement_id = %achievement.id))]
    async fn create(&self, achievement: &Achievement) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO achievements (id, category, title, details, image_url, image_alt,
                                      display_order, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(achievement.id)
        .bind(achievement.category.as_str())
        .bind(&achievement.title)
        .bind(&achievement.details)
        .bind(&achievement.image_url)
        .bind(&achievement.image_alt)
        .bind(achievement.display_order)
        .bind(achievement.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, achievement), fields(achievement_id = %achievement.id))]
    async fn update(&self, achievement: &Achievement) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE achievements
            SET category = $2, title = $3, details = $4, image_url = $5, image_alt = $6,
                display_order = $7
            WHERE id = $1
            ",
        )
        .bind(achievement.id)
        .bind(achievement.category.as_str())
        .bind(&achievement.title)
        .bind(&achievement.details)
        .bind(&achievement.image_url)
        .bind(&achievement.image_alt)
        .bind(achievement.display_order)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(achievement_not_found(achievement.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(achievement_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM achievements")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
