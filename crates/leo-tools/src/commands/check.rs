//! Read-only diagnostics

use std::fmt::Write;

use leo_core::{
    ContentRepository, FeatureCard, ObjectStorage, PortfolioImage, ProjectRepository,
    ServiceOffering, SiteSettingRepository, Testimonial, STATS_SETTING_KEY,
};

/// Gallery URLs shown per project before eliding the rest
const GALLERY_PREVIEW: usize = 3;

/// Project list with image presence
pub async fn check_projects(repo: &dyn ProjectRepository) -> anyhow::Result<String> {
    let projects = repo.list().await?;
    let mut out = format!("Current projects in database: {}\n", projects.len());
    for project in &projects {
        let image = if project.has_image() { "has image" } else { "NO IMAGE" };
        let _ = writeln!(out, "  - {}: {image}", project.title);
    }
    Ok(out)
}

/// Services in display order
pub async fn check_services(repo: &dyn ContentRepository<ServiceOffering>) -> anyhow::Result<String> {
    let services = repo.list_all().await?;
    let mut out = format!("Services: {}\n", services.len());
    for service in &services {
        let hidden = if service.is_active { "" } else { " (hidden)" };
        let _ = writeln!(
            out,
            "  {}. {} [{}]{hidden}",
            service.display_order, service.title, service.icon_name
        );
    }
    Ok(out)
}

/// Repositories read by `check images`
pub struct ImageSources<'a> {
    pub portfolio_images: &'a dyn ContentRepository<PortfolioImage>,
    pub feature_cards: &'a dyn ContentRepository<FeatureCard>,
    pub testimonials: &'a dyn ContentRepository<Testimonial>,
    pub settings: &'a dyn SiteSettingRepository,
}

/// Image URLs of every homepage section, plus the stats setting
pub async fn check_images(sources: &ImageSources<'_>) -> anyhow::Result<String> {
    let mut out = String::from("PORTFOLIO IMAGES:\n");
    for image in sources.portfolio_images.list_all().await? {
        let _ = writeln!(
            out,
            "  {}. {}\n     URL: {}",
            image.display_order,
            image.image_alt.as_deref().unwrap_or("(no alt text)"),
            image.image_url
        );
    }

    out.push_str("\nFEATURE CARDS:\n");
    for card in sources.feature_cards.list_all().await? {
        let _ = writeln!(
            out,
            "  {}. {}\n     Image: {}",
            card.display_order,
            card.title,
            card.image_url.as_deref().unwrap_or("NONE")
        );
    }

    out.push_str("\nTESTIMONIALS:\n");
    for testimonial in sources.testimonials.list_all().await? {
        let _ = writeln!(
            out,
            "  {}. {}\n     Image: {}",
            testimonial.display_order,
            testimonial.name,
            testimonial.image_url.as_deref().unwrap_or("NONE")
        );
    }

    out.push_str("\nSTATS SETTING:\n");
    match sources.settings.get(STATS_SETTING_KEY).await? {
        Some(setting) => {
            let _ = writeln!(out, "  Value: {}", setting.value);
        }
        None => out.push_str("  (not set)\n"),
    }
    Ok(out)
}

/// Per-project dump in display order
pub async fn verify_projects(repo: &dyn ProjectRepository) -> anyhow::Result<String> {
    let mut projects = repo.list().await?;
    projects.sort_by_key(|p| p.display_order);

    let mut out = format!("Found {} projects:\n\n", projects.len());
    for (index, project) in projects.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, project.title);
        let _ = writeln!(out, "   Date: {}", project.date_text);
        let _ = writeln!(
            out,
            "   Category: {}",
            project.category.as_deref().unwrap_or("(none)")
        );
        let _ = writeln!(out, "   Main image: {}", project.image_url);
        let _ = writeln!(out, "   Gallery images: {}", project.gallery_len());
        for (i, url) in project.gallery_images.iter().take(GALLERY_PREVIEW).enumerate() {
            let _ = writeln!(out, "      {}. {url}", i + 1);
        }
        if project.gallery_len() > GALLERY_PREVIEW {
            let _ = writeln!(out, "      ... and {} more", project.gallery_len() - GALLERY_PREVIEW);
        }
        let _ = writeln!(
            out,
            "   Featured: {}",
            if project.is_featured { "Yes" } else { "No" }
        );
        let _ = writeln!(out, "   Order: {}\n", project.display_order);
    }
    Ok(out)
}

/// Bucket visibility and folder listing
pub async fn check_storage(storage: &dyn ObjectStorage) -> anyhow::Result<String> {
    let bucket = storage.bucket_info().await?;
    let mut out = format!("Bucket \"{}\" exists\n  Public: {}\n", bucket.name, bucket.public);
    if !bucket.public {
        let _ = writeln!(
            out,
            "WARNING: bucket is not public, image URLs will not load.\n  \
             Fix: UPDATE storage.buckets SET public = true WHERE id = '{}';",
            bucket.name
        );
    }

    let root = storage.list("").await?;
    let _ = writeln!(out, "Top-level folders: {}", root.join(", "));

    let projects = storage.list("projects").await?;
    let _ = writeln!(out, "Found {} folders in projects/", projects.len());
    for folder in &projects {
        let _ = writeln!(out, "  - {folder}");
    }
    Ok(out)
}
