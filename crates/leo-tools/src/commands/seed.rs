//! Bulk inserts from seed files

use tracing::{info, instrument, warn};

use leo_core::value_objects::is_known_category;
use leo_core::{
    BoardMember, ContentRecord, ContentRepository, Faq, FeatureCard, PortfolioImage, Project,
    ProjectRepository, ServiceOffering, Testimonial,
};

use crate::seed::{ContentSeed, ProjectSeed};

/// A row that could not be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRow {
    pub label: String,
    pub error: String,
}

/// Outcome of `seed-projects`
#[derive(Debug, Default)]
pub struct ProjectSeedSummary {
    pub inserted: Vec<Project>,
    pub failed: Vec<FailedRow>,
    /// Projects in the table afterwards
    pub total: i64,
}

/// Insert projects one by one; failures are recorded and the rest continue
#[instrument(skip_all, fields(count = seeds.len()))]
pub async fn seed_projects(
    repo: &dyn ProjectRepository,
    seeds: Vec<ProjectSeed>,
) -> anyhow::Result<ProjectSeedSummary> {
    let mut summary = ProjectSeedSummary::default();

    for seed in seeds {
        if let Some(category) = seed.category.as_deref() {
            if !is_known_category(category) {
                warn!(title = %seed.title, %category, "Category is not one of the fixed labels");
            }
        }

        let project = seed.into_project();
        match repo.create(&project).await {
            Ok(()) => {
                info!(project_id = %project.id, title = %project.title, "Project inserted");
                summary.inserted.push(project);
            }
            Err(e) => {
                warn!(title = %project.title, error = %e, "Project insert failed");
                summary.failed.push(FailedRow {
                    label: project.title,
                    error: e.to_string(),
                });
            }
        }
    }

    summary.total = repo.count().await?;
    Ok(summary)
}

/// Per-table result of `seed-content`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub table: &'static str,
    pub inserted: usize,
    pub failed: Vec<FailedRow>,
}

impl TableOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Content table repositories
pub struct ContentRepos<'a> {
    pub board_members: &'a dyn ContentRepository<BoardMember>,
    pub testimonials: &'a dyn ContentRepository<Testimonial>,
    pub faqs: &'a dyn ContentRepository<Faq>,
    pub services: &'a dyn ContentRepository<ServiceOffering>,
    pub feature_cards: &'a dyn ContentRepository<FeatureCard>,
    pub portfolio_images: &'a dyn ContentRepository<PortfolioImage>,
}

/// Insert every content table, optionally clearing each one first
pub async fn seed_content(
    repos: &ContentRepos<'_>,
    content: ContentSeed,
    clear: bool,
) -> Vec<TableOutcome> {
    vec![
        seed_table(repos.board_members, "board_members", content.board_members, clear).await,
        seed_table(repos.testimonials, "testimonials", content.testimonials, clear).await,
        seed_table(repos.faqs, "faqs", content.faqs, clear).await,
        seed_table(repos.services, "services", content.services, clear).await,
        seed_table(repos.feature_cards, "feature_cards", content.feature_cards, clear).await,
        seed_table(
            repos.portfolio_images,
            "portfolio_images",
            content.portfolio_images,
            clear,
        )
        .await,
    ]
}

async fn seed_table<T, S>(
    repo: &dyn ContentRepository<T>,
    table: &'static str,
    rows: Vec<S>,
    clear: bool,
) -> TableOutcome
where
    T: ContentRecord + From<S>,
{
    if clear {
        match repo.delete_all().await {
            Ok(deleted) => info!(table, deleted, "Table cleared"),
            Err(e) => warn!(table, error = %e, "Failed to clear table"),
        }
    }

    let mut outcome = TableOutcome {
        table,
        inserted: 0,
        failed: Vec::new(),
    };

    for (index, row) in rows.into_iter().enumerate() {
        let record = T::from(row);
        match repo.create(&record).await {
            Ok(()) => outcome.inserted += 1,
            Err(e) => outcome.failed.push(FailedRow {
                label: format!("{table}[{index}]"),
                error: e.to_string(),
            }),
        }
    }

    info!(table, inserted = outcome.inserted, failed = outcome.failed.len(), "Table seeded");
    outcome
}

/// Delete every project and report how many remain
pub async fn clear_projects(repo: &dyn ProjectRepository) -> anyhow::Result<(u64, i64)> {
    let deleted = repo.delete_all().await?;
    let remaining = repo.count().await?;
    info!(deleted, remaining, "Projects cleared");
    Ok((deleted, remaining))
}
