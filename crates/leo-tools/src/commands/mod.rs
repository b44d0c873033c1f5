//! Subcommand implementations and dispatch
//!
//! Table writes are skipped on dry runs: the planned rows are printed and no
//! database connection is made. Uploads on dry runs go to an in-memory bucket.

pub mod check;
pub mod images;
pub mod maintenance;
pub mod seed;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use serde_json::Value;
use tracing::info;

use leo_common::CredentialScope;
use leo_core::{ContentRecord, ContentRepository, ProjectRepository};
use leo_db::{
    run_migrations, PgBoardMemberRepository, PgFaqRepository, PgFeatureCardRepository,
    PgPortfolioImageRepository, PgProjectRepository, PgServiceOfferingRepository,
    PgSiteSettingRepository, PgTestimonialRepository,
};

use crate::cli::{CheckTarget, Cli, Command};
use crate::context::ToolContext;
use crate::report::MigrationReport;
use crate::seed::{self as seed_file, ContentSeed, FixesSeed, ProjectSeed};

use self::check::ImageSources;
use self::images::ImageMigrator;
use self::seed::{ContentRepos, TableOutcome};

/// Run the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = ToolContext::from_args(&cli.global)?;

    match cli.command {
        Command::MigrateImages { public_dir, report } => {
            migrate_images(&ctx, &public_dir, &report).await
        }
        Command::Cleanup { report } => cleanup(&ctx, &report).await,
        Command::RewriteUrls {
            report,
            input,
            output,
        } => rewrite_urls(&ctx, &report, &input, output.as_deref().unwrap_or(&input)).await,
        Command::SeedProjects { file } => seed_projects(&ctx, &file).await,
        Command::SeedContent { file, clear } => seed_content(&ctx, &file, clear).await,
        Command::ClearProjects => clear_projects(&ctx).await,
        Command::TrimContent {
            services,
            feature_cards,
        } => trim_content(&ctx, services, feature_cards).await,
        Command::FixImages { file } => fix_images(&ctx, &file).await,
        Command::Check { target } => check_tables(&ctx, target).await,
        Command::VerifyProjects => {
            let repo = PgProjectRepository::new(ctx.pool().await?);
            println!("{}", check::verify_projects(&repo).await?);
            Ok(())
        }
        Command::CheckStorage => {
            let storage = ctx.storage(CredentialScope::ServiceRole)?;
            println!("{}", check::check_storage(storage.as_ref()).await?);
            Ok(())
        }
        Command::Schema { dir } => schema(&ctx, &dir).await,
    }
}

async fn migrate_images(ctx: &ToolContext, public_dir: &Path, report_path: &Path) -> anyhow::Result<()> {
    let storage = ctx.storage(CredentialScope::ServiceRole)?;
    info!(dir = %public_dir.display(), bucket = ctx.bucket(), "Starting image migration");

    let report = ImageMigrator::new(storage.as_ref(), public_dir).run().await?;
    report.save(report_path).await?;

    println!("{}", report.summary());
    println!("\nFull report saved to: {}", report_path.display());
    Ok(())
}

async fn cleanup(ctx: &ToolContext, report_path: &Path) -> anyhow::Result<()> {
    let report = MigrationReport::load(report_path).await?;

    if ctx.is_dry_run() {
        println!("Dry run: would delete");
        for file in report.members.iter().chain(&report.achievements) {
            println!("  {}", file.local_path.display());
        }
        for folder in &report.projects {
            println!("  {}/", folder.local_path.display());
        }
        return Ok(());
    }

    let summary = images::cleanup(&report).await?;
    for path in &summary.deleted {
        println!("Deleted: {}", path.display());
    }
    for path in &summary.missing {
        println!("Missing (skipped): {}", path.display());
    }
    println!(
        "\nCleanup complete: {} deleted, {} missing",
        summary.deleted.len(),
        summary.missing.len()
    );
    Ok(())
}

async fn rewrite_urls(
    ctx: &ToolContext,
    report_path: &Path,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let report = MigrationReport::load(report_path).await?;
    let mut document: Value = seed_file::load(input).await?;

    let count = images::rewrite_urls(&mut document, &images::url_map(&report));
    println!("Replaced {count} image paths");

    if ctx.is_dry_run() {
        println!("Dry run: {} not written", output.display());
        return Ok(());
    }

    let content = serde_json::to_string_pretty(&document)?;
    tokio::fs::write(output, content + "\n").await?;
    println!("Wrote {}", output.display());
    Ok(())
}

async fn seed_projects(ctx: &ToolContext, file: &Path) -> anyhow::Result<()> {
    let seeds: Vec<ProjectSeed> = seed_file::load(file).await?;

    if ctx.is_dry_run() {
        println!("Dry run: would insert {} projects", seeds.len());
        for seed in &seeds {
            println!(
                "  - {} ({} gallery images)",
                seed.title,
                seed.gallery_images.len()
            );
        }
        return Ok(());
    }

    let repo = PgProjectRepository::new(ctx.pool().await?);
    let summary = seed::seed_projects(&repo, seeds).await?;

    for project in &summary.inserted {
        println!(
            "Inserted: {} [{}] {} gallery images (ID: {})",
            project.title,
            project.date_text,
            project.gallery_len(),
            project.id
        );
    }
    for failed in &summary.failed {
        println!("Failed: {} - {}", failed.label, failed.error);
    }
    println!("\nTotal projects in database: {}", summary.total);
    Ok(())
}

async fn seed_content(ctx: &ToolContext, file: &Path, clear: bool) -> anyhow::Result<()> {
    let content: ContentSeed = seed_file::load(file).await?;

    if ctx.is_dry_run() {
        println!("Dry run: would insert{}", if clear { " (after clearing)" } else { "" });
        println!("  board_members: {}", content.board_members.len());
        println!("  testimonials: {}", content.testimonials.len());
        println!("  faqs: {}", content.faqs.len());
        println!("  services: {}", content.services.len());
        println!("  feature_cards: {}", content.feature_cards.len());
        println!("  portfolio_images: {}", content.portfolio_images.len());
        return Ok(());
    }

    let pool = ctx.pool().await?;
    let board_members = PgBoardMemberRepository::new(pool.clone());
    let testimonials = PgTestimonialRepository::new(pool.clone());
    let faqs = PgFaqRepository::new(pool.clone());
    let services = PgServiceOfferingRepository::new(pool.clone());
    let feature_cards = PgFeatureCardRepository::new(pool.clone());
    let portfolio_images = PgPortfolioImageRepository::new(pool);
    let repos = ContentRepos {
        board_members: &board_members,
        testimonials: &testimonials,
        faqs: &faqs,
        services: &services,
        feature_cards: &feature_cards,
        portfolio_images: &portfolio_images,
    };

    let outcomes = seed::seed_content(&repos, content, clear).await;
    print_table_outcomes(&outcomes);
    Ok(())
}

fn print_table_outcomes(outcomes: &[TableOutcome]) {
    let (ok, failed): (Vec<&TableOutcome>, Vec<&TableOutcome>) =
        outcomes.iter().partition(|o| o.is_success());
    let total: usize = outcomes.iter().map(|o| o.inserted).sum();

    println!("{}", "=".repeat(50));
    println!("SEED SUMMARY");
    println!("{}", "=".repeat(50));
    println!("Successful: {} tables", ok.len());
    println!("Failed: {} tables", failed.len());
    println!("Total records inserted: {total}");
    for outcome in failed {
        println!("\n{}:", outcome.table);
        for row in &outcome.failed {
            println!("  - {}: {}", row.label, row.error);
        }
    }
}

async fn clear_projects(ctx: &ToolContext) -> anyhow::Result<()> {
    if ctx.is_dry_run() {
        println!("Dry run: would delete every project");
        return Ok(());
    }

    let repo = PgProjectRepository::new(ctx.pool().await?);
    for project in repo.list().await? {
        println!("  - {} ({})", project.title, project.id);
    }

    let (deleted, remaining) = seed::clear_projects(&repo).await?;
    println!("Deleted {deleted} projects");
    println!("Remaining projects: {remaining}");
    if remaining != 0 {
        anyhow::bail!("{remaining} projects remain after deletion");
    }
    Ok(())
}

async fn trim_content(ctx: &ToolContext, services: usize, feature_cards: usize) -> anyhow::Result<()> {
    if ctx.is_dry_run() {
        println!("Dry run: would keep the first {services} services and {feature_cards} feature cards");
        return Ok(());
    }

    let pool = ctx.pool().await?;
    report_trim(&PgServiceOfferingRepository::new(pool.clone()), services).await?;
    report_trim(&PgFeatureCardRepository::new(pool.clone()), feature_cards).await?;

    let missing = maintenance::projects_missing_images(&PgProjectRepository::new(pool)).await?;
    if missing.is_empty() {
        println!("Every project has an image");
    } else {
        println!("Projects without an image:");
        for project in missing {
            println!("  - {} ({})", project.title, project.id);
        }
    }
    Ok(())
}

async fn report_trim<T: ContentRecord>(repo: &dyn ContentRepository<T>, keep: usize) -> anyhow::Result<()> {
    let deleted = maintenance::trim_table(repo, keep).await?;
    if deleted.is_empty() {
        println!("{}: count is good (keeping {keep})", T::KIND);
    } else {
        println!("{}: deleted {} rows beyond the first {keep}", T::KIND, deleted.len());
    }
    Ok(())
}

async fn fix_images(ctx: &ToolContext, file: &Path) -> anyhow::Result<()> {
    let fixes: FixesSeed = seed_file::load(file).await?;

    if ctx.is_dry_run() {
        for fix in fixes.portfolio_images.iter().chain(&fixes.feature_cards) {
            println!("Dry run: display order {} -> {}", fix.display_order, fix.image_url);
        }
        for setting in &fixes.settings {
            println!("Dry run: setting {}", setting.key);
        }
        return Ok(());
    }

    let pool = ctx.pool().await?;
    let portfolio = PgPortfolioImageRepository::new(pool.clone());
    let cards = PgFeatureCardRepository::new(pool.clone());
    let settings = PgSiteSettingRepository::new(pool);

    println!("Updating portfolio images...");
    for outcome in maintenance::apply_image_fixes(&portfolio, &fixes.portfolio_images).await? {
        print_fix(&outcome);
    }
    println!("\nUpdating feature cards...");
    for outcome in maintenance::apply_image_fixes(&cards, &fixes.feature_cards).await? {
        print_fix(&outcome);
    }
    println!("\nStoring settings...");
    for (key, result) in maintenance::apply_settings(&settings, fixes.settings).await {
        match result {
            Ok(()) => println!("  Stored {key}"),
            Err(e) => println!("  Failed {key}: {e}"),
        }
    }
    Ok(())
}

fn print_fix(outcome: &maintenance::FixOutcome) {
    match &outcome.error {
        Some(e) => println!("  Failed display order {}: {e}", outcome.display_order),
        None => println!(
            "  Updated display order {} ({} rows)",
            outcome.display_order, outcome.updated
        ),
    }
}

async fn check_tables(ctx: &ToolContext, target: CheckTarget) -> anyhow::Result<()> {
    let pool = ctx.pool().await?;
    let out = match target {
        CheckTarget::Projects => check::check_projects(&PgProjectRepository::new(pool)).await?,
        CheckTarget::Services => {
            check::check_services(&PgServiceOfferingRepository::new(pool)).await?
        }
        CheckTarget::Images => {
            let portfolio_images = PgPortfolioImageRepository::new(pool.clone());
            let feature_cards = PgFeatureCardRepository::new(pool.clone());
            let testimonials = PgTestimonialRepository::new(pool.clone());
            let settings = PgSiteSettingRepository::new(pool);
            check::check_images(&ImageSources {
                portfolio_images: &portfolio_images,
                feature_cards: &feature_cards,
                testimonials: &testimonials,
                settings: &settings,
            })
            .await?
        }
    };
    println!("{out}");
    Ok(())
}

async fn schema(ctx: &ToolContext, dir: &Path) -> anyhow::Result<()> {
    if ctx.is_dry_run() {
        println!("Dry run: would apply migrations from {}", dir.display());
        return Ok(());
    }

    let pool = ctx.pool().await?;
    let applied = run_migrations(&pool, dir).await?;
    println!("Schema up to date ({applied} migrations in {})", dir.display());
    Ok(())
}
