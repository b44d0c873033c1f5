//! Content fixes: trimming tables and repointing images

use tracing::{info, warn};
use uuid::Uuid;

use leo_core::{
    ContentRecord, ContentRepository, FeatureCard, PortfolioImage, Project, ProjectRepository,
    SiteSetting, SiteSettingRepository,
};

use crate::seed::{ImageFix, SettingSeed};

/// Keep the first `keep` rows by display order and delete the rest.
/// Returns the ids of the deleted rows.
pub async fn trim_table<T: ContentRecord>(
    repo: &dyn ContentRepository<T>,
    keep: usize,
) -> anyhow::Result<Vec<Uuid>> {
    let rows = repo.list_all().await?;
    if rows.len() <= keep {
        info!(kind = T::KIND, count = rows.len(), keep, "Nothing to trim");
        return Ok(Vec::new());
    }

    let mut deleted = Vec::new();
    for row in rows.iter().skip(keep) {
        repo.delete(row.id()).await?;
        info!(kind = T::KIND, id = %row.id(), "Deleted");
        deleted.push(row.id());
    }
    Ok(deleted)
}

/// Projects whose main image is empty
pub async fn projects_missing_images(repo: &dyn ProjectRepository) -> anyhow::Result<Vec<Project>> {
    let projects = repo.list().await?;
    Ok(projects.into_iter().filter(|p| !p.has_image()).collect())
}

/// Records whose image can be replaced by `fix-images`
pub trait ImageSlot: ContentRecord {
    fn set_image(&mut self, url: String, alt: Option<String>);
}

impl ImageSlot for PortfolioImage {
    fn set_image(&mut self, url: String, alt: Option<String>) {
        self.image_url = url;
        if alt.is_some() {
            self.image_alt = alt;
        }
    }
}

impl ImageSlot for FeatureCard {
    fn set_image(&mut self, url: String, alt: Option<String>) {
        self.image_url = Some(url);
        if alt.is_some() {
            self.image_alt = alt;
        }
    }
}

/// Result of applying one fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub display_order: i32,
    pub updated: usize,
    pub error: Option<String>,
}

/// Update the image of every row at each fix's display order
pub async fn apply_image_fixes<T: ImageSlot>(
    repo: &dyn ContentRepository<T>,
    fixes: &[ImageFix],
) -> anyhow::Result<Vec<FixOutcome>> {
    let rows = repo.list_all().await?;
    let mut outcomes = Vec::with_capacity(fixes.len());

    for fix in fixes {
        let mut outcome = FixOutcome {
            display_order: fix.display_order,
            updated: 0,
            error: None,
        };

        let targets = rows
            .iter()
            .filter(|r| r.display_order() == fix.display_order);
        for row in targets {
            let mut record = row.clone();
            record.set_image(fix.image_url.clone(), fix.image_alt.clone());
            match repo.update(&record).await {
                Ok(()) => outcome.updated += 1,
                Err(e) => {
                    warn!(kind = T::KIND, display_order = fix.display_order, error = %e, "Update failed");
                    outcome.error = Some(e.to_string());
                }
            }
        }

        if outcome.updated == 0 && outcome.error.is_none() {
            outcome.error = Some(format!("No {} with display order {}", T::KIND, fix.display_order));
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Upsert settings, returning the keys that failed with their errors
pub async fn apply_settings(
    repo: &dyn SiteSettingRepository,
    settings: Vec<SettingSeed>,
) -> Vec<(String, Result<(), String>)> {
    let mut results = Vec::with_capacity(settings.len());
    for seed in settings {
        let setting = SiteSetting::from(seed);
        let result = repo.upsert(&setting).await.map_err(|e| e.to_string());
        if result.is_ok() {
            info!(key = %setting.key, "Setting stored");
        }
        results.push((setting.key, result));
    }
    results
}
