//! Value objects - immutable types that represent domain concepts

mod achievement_category;
mod application_status;
mod project_category;
pub mod storage_path;

pub use achievement_category::AchievementCategory;
pub use application_status::{ApplicationStatus, ParseStatusError};
pub use project_category::{is_known_category, PROJECT_CATEGORIES};
pub use storage_path::ImageFolder;
