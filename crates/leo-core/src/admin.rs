//! Admin policy - a single configured admin account
//!
//! There are no roles or permission sets: a session is privileged exactly when
//! its email matches the configured admin email, ignoring case.

use uuid::Uuid;

use crate::entities::Session;
use crate::error::DomainError;

/// The configured admin account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    admin_email: String,
}

/// Identity of an authorized admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub user_id: Uuid,
    pub email: String,
}

impl AdminPolicy {
    pub fn new(admin_email: impl AsRef<str>) -> Self {
        Self {
            admin_email: normalize(admin_email.as_ref()),
        }
    }

    /// The configured admin email, lowercased
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Check if `email` belongs to the admin account
    pub fn is_admin_email(&self, email: &str) -> bool {
        !self.admin_email.is_empty() && normalize(email) == self.admin_email
    }

    /// Authorize a privileged action
    pub fn authorize(&self, session: Option<&Session>) -> Result<AdminIdentity, DomainError> {
        let session = session.ok_or(DomainError::AdminSessionRequired)?;
        let email = session
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or(DomainError::AdminSessionRequired)?;

        if !self.is_admin_email(email) {
            return Err(DomainError::NotAdmin);
        }

        Ok(AdminIdentity {
            user_id: session.user_id,
            email: normalize(email),
        })
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
