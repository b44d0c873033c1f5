//! PostgreSQL implementation of FeaturedRepository
//!
//! Replacing a selection deletes every row of the join table and inserts the
//! new ids with their position, inside one transaction: readers see either
//! the old or the new selection, never an empty or partial one.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use leo_core::entities::{FeaturedAchievement, FeaturedProject};
use leo_core::traits::{FeaturedRepository, RepoResult};

use crate::models::{FeaturedAchievementModel, FeaturedProjectModel};

use super::error::{
    achievement_not_found, map_db_error, map_foreign_key_violation, project_not_found,
};

/// PostgreSQL implementation of FeaturedRepository
#[derive(Clone)]
pub struct PgFeaturedRepository {
    pool: PgPool,
}

impl PgFeaturedRepository {
    /// Create a new PgFeaturedRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeaturedRepository for PgFeaturedRepository {
    #[instrument(skip(self))]
    async fn list_projects(&self) -> RepoResult<Vec<FeaturedProject>> {
        let results = sqlx::query_as::<_, FeaturedProjectModel>(
            r"
            SELECT p.id, p.title, p.date_text, p.category, p.description, p.image_url,
                   p.gallery_images, p.is_featured, p.display_order, p.project_id,
                   p.completion_date, p.created_at, f.display_order AS featured_order
            FROM homepage_featured_projects f
            INNER JOIN projects p ON p.id = f.project_id
            ORDER BY f.display_order ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeaturedProject::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_achievements(&self) -> RepoResult<Vec<FeaturedAchievement>> {
        let results = sqlx::query_as::<_, FeaturedAchievementModel>(
            r"
            SELECT a.id, a.category, a.title, a.details, a.image_url, a.image_alt,
                   a.display_order, a.created_at, f.display_order AS featured_order
            FROM homepage_featured_achievements f
            INNER JOIN achievements a ON a.id = f.achievement_id
            ORDER BY f.display_order ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeaturedAchievement::from).collect())
    }

    #[instrument(skip(self))]
    async fn replace_projects(&self, ids: &[Uuid]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM homepage_featured_projects")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for (index, id) in ids.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO homepage_featured_projects (project_id, display_order)
                VALUES ($1, $2)
                ",
            )
            .bind(id)
            .bind(index as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_foreign_key_violation(e, || project_not_found(*id)))?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn replace_achievements(&self, ids: &[Uuid]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM homepage_featured_achievements")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for (index, id) in ids.iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO homepage_featured_achievements (achievement_id, display_order)
                VALUES ($1, $2)
                ",
            )
            .bind(id)
            .bind(index as i32)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_foreign_key_violation(e, || achievement_not_found(*id)))?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
