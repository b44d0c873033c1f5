//! PostgreSQL implementation of ContentRepository
//!
//! Board members and the homepage sections share one shape: an id, editable
//! columns, `display_order`, `is_active` and `created_at`. A single generic
//! repository serves all of them; each record type describes its table
//! through [`ContentTable`].

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgPool, Postgres};
use tracing::instrument;
use uuid::Uuid;

use leo_core::entities::{
    BoardMember, ContentRecord, Faq, FeatureCard, PortfolioImage, ServiceOffering, Testimonial,
};
use leo_core::traits::{ContentRepository, RepoResult};

use crate::models::{
    BoardMemberModel, FaqModel, FeatureCardModel, PortfolioImageModel, ServiceModel,
    TestimonialModel,
};

use super::error::map_db_error;

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Table description for a content record type
pub trait ContentTable: ContentRecord {
    /// Row type read back from the table
    type Model: for<'r> FromRow<'r, PgRow> + Into<Self> + Send + Unpin;

    const TABLE: &'static str;

    /// Editable columns, in the order [`ContentTable::bind_fields`] binds them
    const FIELDS: &'static [&'static str];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;

    fn select_sql(filter: &str) -> String {
        format!(
            "SELECT id, {}, display_order, is_active, created_at FROM {} {filter} \
             ORDER BY display_order ASC, created_at ASC",
            Self::FIELDS.join(", "),
            Self::TABLE
        )
    }

    fn insert_sql() -> String {
        let n = Self::FIELDS.len();
        let placeholders: Vec<String> = (1..=n + 4).map(|i| format!("${i}")).collect();
        format!(
            "INSERT INTO {} (id, {}, display_order, is_active, created_at) VALUES ({})",
            Self::TABLE,
            Self::FIELDS.join(", "),
            placeholders.join(", ")
        )
    }

    fn update_sql() -> String {
        let n = Self::FIELDS.len();
        let sets: Vec<String> = Self::FIELDS
            .iter()
            .enumerate()
            .map(|(i, field)| format!("{field} = ${}", i + 2))
            .collect();
        format!(
            "UPDATE {} SET {}, display_order = ${}, is_active = ${} WHERE id = $1",
            Self::TABLE,
            sets.join(", "),
            n + 2,
            n + 3
        )
    }
}

impl ContentTable for BoardMember {
    type Model = BoardMemberModel;
    const TABLE: &'static str = "board_members";
    const FIELDS: &'static [&'static str] = &["name", "role", "image_url", "bio", "email", "linkedin"];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.role)
            .bind(&self.image_url)
            .bind(&self.bio)
            .bind(&self.email)
            .bind(&self.linkedin)
    }
}

impl ContentTable for Testimonial {
    type Model = TestimonialModel;
    const TABLE: &'static str = "testimonials";
    const FIELDS: &'static [&'static str] = &["name", "role", "image_url", "quote"];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(&self.role)
            .bind(&self.image_url)
            .bind(&self.quote)
    }
}

impl ContentTable for Faq {
    type Model = FaqModel;
    const TABLE: &'static str = "faqs";
    const FIELDS: &'static [&'static str] = &["question", "answer"];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(&self.question).bind(&self.answer)
    }
}

impl ContentTable for ServiceOffering {
    type Model = ServiceModel;
    const TABLE: &'static str = "services";
    const FIELDS: &'static [&'static str] = &["title", "description", "icon_name"];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.title)
            .bind(&self.description)
            .bind(&self.icon_name)
    }
}

impl ContentTable for FeatureCard {
    type Model = FeatureCardModel;
    const TABLE: &'static str = "feature_cards";
    const FIELDS: &'static [&'static str] = &["title", "description", "image_url", "image_alt"];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.title)
            .bind(&self.description)
            .bind(&self.image_url)
            .bind(&self.image_alt)
    }
}

impl ContentTable for PortfolioImage {
    type Model = PortfolioImageModel;
    const TABLE: &'static str = "portfolio_images";
    const FIELDS: &'static [&'static str] = &["image_url", "image_alt"];

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(&self.image_url).bind(&self.image_alt)
    }
}

/// PostgreSQL implementation of ContentRepository for any [`ContentTable`]
pub struct PgContentRepository<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgContentRepository<T> {
    /// Create a new PgContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<T> Clone for PgContentRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

pub type PgBoardMemberRepository = PgContentRepository<BoardMember>;
pub type PgTestimonialRepository = PgContentRepository<Testimonial>;
pub type PgFaqRepository = PgContentRepository<Faq>;
pub type PgServiceOfferingRepository = PgContentRepository<ServiceOffering>;
pub type PgFeatureCardRepository = PgContentRepository<FeatureCard>;
pub type PgPortfolioImageRepository = PgContentRepository<PortfolioImage>;

#[async_trait]
impl<T: ContentTable> ContentRepository<T> for PgContentRepository<T> {
    #[instrument(skip(self), fields(table = T::TABLE))]
    async fn list_active(&self) -> RepoResult<Vec<T>> {
        let sql = T::select_sql("WHERE is_active = TRUE");
        let rows = sqlx::query_as::<_, T::Model>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self), fields(table = T::TABLE))]
    async fn list_all(&self) -> RepoResult<Vec<T>> {
        let sql = T::select_sql("");
        let rows = sqlx::query_as::<_, T::Model>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self), fields(table = T::TABLE))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<T>> {
        let sql = T::select_sql("WHERE id = $1");
        let row = sqlx::query_as::<_, T::Model>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self, record), fields(table = T::TABLE, id = %record.id()))]
    async fn create(&self, record: &T) -> RepoResult<()> {
        let sql = T::insert_sql();
        let query = sqlx::query(&sql).bind(record.id());
        record
            .bind_fields(query)
            .bind(record.display_order())
            .bind(record.is_active())
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, record), fields(table = T::TABLE, id = %record.id()))]
    async fn update(&self, record: &T) -> RepoResult<()> {
        let sql = T::update_sql();
        let query = sqlx::query(&sql).bind(record.id());
        let result = record
            .bind_fields(query)
            .bind(record.display_order())
            .bind(record.is_active())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(T::not_found(record.id()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(table = T::TABLE))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(T::not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(table = T::TABLE))]
    async fn delete_all(&self) -> RepoResult<u64> {
        let sql = format!("DELETE FROM {}", T::TABLE);
        let result = sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
