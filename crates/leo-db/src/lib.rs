//! # leo-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `leo-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use leo_db::{create_pool, DatabaseConfig, PgProjectRepository};
//! use leo_core::ProjectRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     let projects = PgProjectRepository::new(pool).list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, create_pool_from_env, health_check, run_migrations, DatabaseConfig, PgPool,
    DEFAULT_MIGRATIONS_DIR,
};
pub use repositories::{
    ContentTable, PgAchievementRepository, PgBoardMemberRepository, PgContentRepository,
    PgFaqRepository, PgFeatureCardRepository, PgFeaturedRepository,
    PgMembershipApplicationRepository, PgPortfolioImageRepository, PgProjectRepository,
    PgServiceOfferingRepository, PgSiteSettingRepository, PgTestimonialRepository,
};
