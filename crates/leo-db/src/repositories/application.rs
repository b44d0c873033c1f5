//! PostgreSQL implementation of MembershipApplicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use leo_core::entities::MembershipApplication;
use leo_core::traits::{MembershipApplicationRepository, RepoResult};
use leo_core::value_objects::ApplicationStatus;

use crate::models::MembershipApplicationModel;

use super::error::{application_not_found, map_db_error};

/// PostgreSQL implementation of MembershipApplicationRepository
#[derive(Clone)]
pub struct PgMembershipApplicationRepository {
    pool: PgPool,
}

impl PgMembershipApplicationRepository {
    /// Create a new PgMembershipApplicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipApplicationRepository for PgMembershipApplicationRepository {
    #[instrument(skip(self, application), fields(application_id = %application.id))]
    async fn create(&self, application: &MembershipApplication) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO membership_applications (id, full_name, email, phone, age, organization,
                                                 motivation, consent, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(application.id)
        .bind(&application.full_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(application.age)
        .bind(&application.organization)
        .bind(&application.motivation)
        .bind(application.consent)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<MembershipApplication>> {
        let results = sqlx::query_as::<_, MembershipApplicationModel>(
            r"
            SELECT id, full_name, email, phone, age, organization, motivation, consent, status,
                   admin_notes, reviewed_at, reviewer_email, created_at
            FROM membership_applications
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MembershipApplication::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MembershipApplication>> {
        let result = sqlx::query_as::<_, MembershipApplicationModel>(
            r"
            SELECT id, full_name, email, phone, age, organization, motivation, consent, status,
                   admin_notes, reviewed_at, reviewer_email, created_at
            FROM membership_applications
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MembershipApplication::from))
    }

    #[instrument(skip(self, admin_notes))]
    async fn update_review(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        admin_notes: Option<&str>,
        reviewer_email: &str,
    ) -> RepoResult<MembershipApplication> {
        let result = sqlx::query_as::<_, MembershipApplicationModel>(
            r"
            UPDATE membership_applications
            SET status = $2, admin_notes = $3, reviewed_at = NOW(), reviewer_email = $4
            WHERE id = $1
            RETURNING id, full_name, email, phone, age, organization, motivation, consent, status,
                      admin_notes, reviewed_at, reviewer_email, created_at
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(admin_notes)
        .bind(reviewer_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(MembershipApplication::from)
            .ok_or_else(|| application_not_found(id))
    }
}
