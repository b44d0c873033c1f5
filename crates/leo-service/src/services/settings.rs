//! Site settings service
//!
//! Settings are free-form JSON values stored by key; the homepage stats block
//! lives under `stats`.

use leo_core::{DomainError, Session, SiteSetting};
use tracing::{info, instrument};

use crate::dto::{SettingsMapResponse, SiteSettingResponse, UpsertSettingRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::text::optional_text;

/// Site settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> ServiceResult<SiteSettingResponse> {
        let setting = self
            .ctx
            .setting_repo()
            .get(key)
            .await?
            .ok_or_else(|| DomainError::SettingNotFound(key.to_string()))?;
        Ok(setting.into())
    }

    /// Every setting as a key → value map
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<SettingsMapResponse> {
        let settings = self.ctx.setting_repo().list().await?;
        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }

    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn upsert(
        &self,
        session: &Session,
        key: &str,
        request: UpsertSettingRequest,
    ) -> ServiceResult<SiteSettingResponse> {
        self.ctx.authorize_admin(session)?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ServiceError::validation("Setting key is required"));
        }

        let setting = SiteSetting::new(key, request.value, optional_text(request.description));
        self.ctx.setting_repo().upsert(&setting).await?;

        info!(key = %key, "Site setting saved");
        Ok(setting.into())
    }
}
