//! Admin authentication service
//!
//! Password sign-in against the hosted auth provider, restricted to the
//! configured admin account.

use leo_core::{DomainError, Session};
use tracing::{info, instrument, warn};

use crate::dto::{AdminLoginRequest, AdminSessionResponse, AdminUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin authentication service
pub struct AdminAuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminAuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in with email and password.
    ///
    /// A valid account that is not the admin gets its fresh session revoked
    /// and the call fails with `AccountNotAllowed`.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: AdminLoginRequest) -> ServiceResult<AdminSessionResponse> {
        let session = self
            .ctx
            .auth()
            .sign_in_with_password(request.email.trim(), &request.password)
            .await?;

        let identity = match self.ctx.admin_policy().authorize(Some(&session)) {
            Ok(identity) => identity,
            Err(_) => {
                warn!(user_id = %session.user_id, "Sign-in by non-admin account");
                if let Err(e) = self.ctx.auth().sign_out(&session.access_token).await {
                    warn!(error = %e, "Failed to revoke non-admin session");
                }
                return Err(DomainError::AccountNotAllowed.into());
            }
        };

        info!(user_id = %identity.user_id, "Admin signed in");

        Ok(AdminSessionResponse {
            access_token: session.access_token,
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
            user: identity.into(),
        })
    }

    /// Revoke the admin's session at the provider
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn sign_out(&self, session: &Session) -> ServiceResult<()> {
        self.ctx.auth().sign_out(&session.access_token).await?;
        info!("Admin signed out");
        Ok(())
    }

    /// Identity behind the session, if it is the admin
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn current_admin(&self, session: &Session) -> ServiceResult<AdminUserResponse> {
        Ok(self.ctx.authorize_admin(session)?.into())
    }
}
