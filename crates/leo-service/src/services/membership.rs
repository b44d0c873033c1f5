//! Membership service
//!
//! Public join form submissions and their review by the admin.

use leo_core::{DomainError, MembershipApplication, Session};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::dto::{
    ApplicationReceiptResponse, ApplicationResponse, ReviewApplicationRequest,
    SubmitApplicationRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::text::{optional_text, trimmed};

/// Shown to the applicant once the application is stored
pub const APPLICATION_RECEIVED_MESSAGE: &str = "Thank you! Your application has been received.";

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a join form submission.
    ///
    /// Required fields are checked after trimming, and an application
    /// without consent is rejected before anything is written.
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: SubmitApplicationRequest,
    ) -> ServiceResult<ApplicationReceiptResponse> {
        let full_name = trimmed(&request.full_name);
        let email = request.email.trim().to_lowercase();
        let phone = trimmed(&request.phone);
        let motivation = trimmed(&request.motivation);

        if full_name.is_empty() || email.is_empty() || phone.is_empty() || motivation.is_empty() {
            return Err(DomainError::MissingRequiredFields.into());
        }
        if !request.consent {
            return Err(DomainError::ConsentRequired.into());
        }
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail.into());
        }

        let application = MembershipApplication::new(
            full_name,
            email,
            phone,
            request.age,
            optional_text(request.organization),
            motivation,
            request.consent,
        );

        self.ctx.application_repo().create(&application).await?;

        info!(application_id = %application.id, "Membership application received");

        Ok(ApplicationReceiptResponse {
            id: application.id,
            status: application.status,
            message: APPLICATION_RECEIVED_MESSAGE.to_string(),
        })
    }

    /// All applications, newest first
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<ApplicationResponse>> {
        self.ctx.authorize_admin(session)?;

        let applications = self.ctx.application_repo().list().await?;
        Ok(applications.into_iter().map(Into::into).collect())
    }

    /// Record a review decision, stamping the reviewer and time
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn review(
        &self,
        session: &Session,
        id: Uuid,
        request: ReviewApplicationRequest,
    ) -> ServiceResult<ApplicationResponse> {
        let admin = self.ctx.authorize_admin(session)?;

        let notes = request.admin_notes.map(|n| n.trim().to_string());
        let application = self
            .ctx
            .application_repo()
            .update_review(id, request.status, notes.as_deref(), &admin.email)
            .await?;

        info!(
            application_id = %id,
            status = %request.status,
            "Membership application reviewed"
        );

        Ok(application.into())
    }
}
