//! PostgreSQL implementation of ProjectRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use leo_core::entities::Project;
use leo_core::traits::{ProjectRepository, RepoResult};

use crate::models::ProjectModel;

use super::error::{map_db_error, project_not_found};

/// PostgreSQL implementation of ProjectRepository
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    /// Create a new PgProjectRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Project>> {
        let results = sqlx::query_as::<_, ProjectModel>(
            r"
            SELECT id, title, date_text, category, description, image_url, gallery_images,
                   is_featured, display_order, project_id, completion_date, created_at
            FROM projects
            ORDER BY project_id DESC NULLS LAST, created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>> {
        let result = sqlx::query_as::<_, ProjectModel>(
            r"
            SELECT id, title, date_text, category, description, image_url, gallery_images,
                   is_featured, display_order, project_id, completion_date, created_at
            FROM projects
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Project::from))
    }

    #[instrument(skip(self, project), fields(project_id = %project.id))]
    async fn create(&self, project: &Project) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO projects (id, title, date_text, category, description, image_url,
                                  gallery_images, is_featured, display_order, project_id,
                                  completion_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.date_text)
        .bind(&project.category)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.gallery_images)
        .bind(project.is_featured)
        .bind(project.display_order)
        .bind(&project.project_ref)
        .bind(project.completion_date)
        .bind(project.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, project), fields(project_id = %project.id))]
    async fn update(&self, project: &Project) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE projects
            SET title = $2, date_text = $3, category = $4, description = $5, image_url = $6,
                gallery_images = $7, is_featured = $8, display_order = $9, project_id = $10,
                completion_date = $11
            WHERE id = $1
            ",
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.date_text)
        .bind(&project.category)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.gallery_images)
        .bind(project.is_featured)
        .bind(project.display_order)
        .bind(&project.project_ref)
        .bind(project.completion_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(project_not_found(project.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(project_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM projects")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProjectRepository>();
    }
}
