//! Membership application - submitted through the public join form and
//! reviewed by the admin

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ApplicationStatus;

/// Membership application entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipApplication {
    pub id: Uuid,
    pub full_name: String,
    /// Stored lowercased
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub organization: Option<String>,
    pub motivation: String,
    pub consent: bool,
    pub status: ApplicationStatus,
    pub admin_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MembershipApplication {
    /// Create a fresh application in the `new` state
    pub fn new(
        full_name: String,
        email: String,
        phone: String,
        age: i32,
        organization: Option<String>,
        motivation: String,
        consent: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            phone,
            age,
            organization,
            motivation,
            consent,
            status: ApplicationStatus::New,
            admin_notes: None,
            reviewed_at: None,
            reviewer_email: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether an admin has looked at this application
    #[inline]
    pub fn is_reviewed(&self) -> bool {
        self.reviewed_at.is_some()
    }

    /// Record a review decision
    pub fn review(&mut self, status: ApplicationStatus, notes: Option<String>, reviewer: &str) {
        self.status = status;
        self.admin_notes = notes;
        self.reviewed_at = Some(Utc::now());
        self.reviewer_email = Some(reviewer.to_string());
    }
}
