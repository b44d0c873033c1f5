//! Homepage featured join rows

use sqlx::FromRow;

use super::{AchievementModel, ProjectModel};

/// A project row joined with its homepage position
#[derive(Debug, Clone, FromRow)]
pub struct FeaturedProjectModel {
    #[sqlx(flatten)]
    pub project: ProjectModel,
    pub featured_order: i32,
}

/// An achievement row joined with its homepage position
#[derive(Debug, Clone, FromRow)]
pub struct FeaturedAchievementModel {
    #[sqlx(flatten)]
    pub achievement: AchievementModel,
    pub featured_order: i32,
}
