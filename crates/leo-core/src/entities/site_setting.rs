//! Site setting - a free-form JSON value stored under a text key

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Key under which the homepage statistics are stored
pub const STATS_SETTING_KEY: &str = "stats";

/// Site-wide setting
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSetting {
    pub key: String,
    pub value: Value,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSetting {
    pub fn new(key: impl Into<String>, value: Value, description: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
            description,
            updated_at: Utc::now(),
        }
    }
}
