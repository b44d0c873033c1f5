//! Site setting model -> entity mapper

use leo_core::entities::SiteSetting;

use crate::models::SiteSettingModel;

impl From<SiteSettingModel> for SiteSetting {
    fn from(model: SiteSettingModel) -> Self {
        SiteSetting {
            key: model.key,
            value: model.value,
            description: model.description,
            updated_at: model.updated_at,
        }
    }
}
