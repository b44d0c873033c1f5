//! Authenticated session issued by the hosted auth service

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Session of a signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(user_id: Uuid, email: Option<String>, access_token: String) -> Self {
        Self {
            user_id,
            email,
            access_token,
            expires_at: None,
        }
    }

    /// Check if the session has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}
