//! Homepage featured selections

use super::{Achievement, Project};

/// Maximum number of projects shown on the homepage
pub const MAX_FEATURED_PROJECTS: usize = 5;

/// Maximum number of achievements shown on the homepage
pub const MAX_FEATURED_ACHIEVEMENTS: usize = 3;

/// A project selected for the homepage, with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedProject {
    pub project: Project,
    pub featured_order: i32,
}

/// An achievement selected for the homepage, with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedAchievement {
    pub achievement: Achievement,
    pub featured_order: i32,
}
