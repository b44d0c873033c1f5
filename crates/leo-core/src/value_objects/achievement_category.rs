//! Achievement category - which awards section an achievement is listed under

use std::fmt;

use serde::{Deserialize, Serialize};

/// Achievement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Awards won for a club project
    #[default]
    Project,
    /// Awards won by an individual member
    Individual,
    /// Special recognition
    Special,
}

impl AchievementCategory {
    /// All categories in the order the achievements page lists them
    pub const ALL: [Self; 3] = [Self::Project, Self::Individual, Self::Special];

    /// Get the stored string form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Individual => "individual",
            Self::Special => "special",
        }
    }

    /// Parse a stored value, falling back to `Project` for anything unknown
    #[must_use]
    pub fn from_db(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "individual" => Self::Individual,
            "special" => Self::Special,
            _ => Self::Project,
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
