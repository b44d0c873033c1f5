//! Achievement and featured achievement model -> entity mapper

use leo_core::entities::{Achievement, FeaturedAchievement};
use leo_core::value_objects::AchievementCategory;

use crate::models::{AchievementModel, FeaturedAchievementModel};

impl From<AchievementModel> for Achievement {
    fn from(model: AchievementModel) -> Self {
        Achievement {
            id: model.id,
            category: AchievementCategory::from_db(&model.category),
            title: model.title,
            details: model.details,
            image_url: model.image_url,
            image_alt: model.image_alt,
            display_order: model.display_order,
            created_at: model.created_at,
        }
    }
}

impl From<FeaturedAchievementModel> for FeaturedAchievement {
    fn from(model: FeaturedAchievementModel) -> Self {
        FeaturedAchievement {
            achievement: model.achievement.into(),
            featured_order: model.featured_order,
        }
    }
}
