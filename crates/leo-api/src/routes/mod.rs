//! Route definitions
//!
//! Public site routes and admin dashboard routes, mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};
use leo_core::entities::{
    BoardMember, Faq, FeatureCard, PortfolioImage, ServiceOffering, Testimonial,
};
use leo_service::SectionContent;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::handlers::{
    achievements, admin_auth, applications, featured, health, home, media, projects, sections,
    settings,
};
use crate::state::AppState;

/// Multipart overhead allowed on top of the image bytes
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Files accepted by one upload request
const MAX_FILES_PER_UPLOAD: usize = 10;

/// Create the main API router (health routes are separate, outside rate limiting)
pub fn create_router(max_image_bytes: usize) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(max_image_bytes))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes(max_image_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes(max_image_bytes))
}

/// Routes the public site reads from (plus the join form)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::landing_page))
        .route("/projects", get(projects::list_projects))
        .route("/projects/:id", get(projects::get_project))
        .route("/project-categories", get(projects::list_categories))
        .route("/achievements", get(achievements::list_achievements))
        .route("/achievements/page", get(achievements::achievements_page))
        .route("/board-members", get(sections::list_public::<BoardMember>))
        .route("/testimonials", get(sections::list_public::<Testimonial>))
        .route("/faqs", get(sections::list_public::<Faq>))
        .route("/services", get(sections::list_public::<ServiceOffering>))
        .route("/feature-cards", get(sections::list_public::<FeatureCard>))
        .route("/portfolio-images", get(sections::list_public::<PortfolioImage>))
        .route("/settings", get(settings::list_settings))
        .route("/settings/:key", get(settings::get_setting))
        .route("/featured/projects", get(featured::list_featured_projects))
        .route("/featured/achievements", get(featured::list_featured_achievements))
        .route("/applications", post(applications::submit_application))
}

/// Admin dashboard routes; every handler takes the bearer session
fn admin_routes(max_image_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/login", post(admin_auth::login))
        .route("/logout", post(admin_auth::logout))
        .route("/session", get(admin_auth::current_session))
        .route("/applications", get(applications::list_applications))
        .route("/applications/:id", patch(applications::review_application))
        .route(
            "/projects",
            get(projects::admin_list_projects).post(projects::create_project),
        )
        .route(
            "/projects/:id",
            patch(projects::update_project).delete(projects::delete_project),
        )
        .route(
            "/achievements",
            get(achievements::admin_list_achievements).post(achievements::create_achievement),
        )
        .route(
            "/achievements/:id",
            patch(achievements::update_achievement).delete(achievements::delete_achievement),
        )
        .merge(section_routes::<BoardMember>("/board-members"))
        .merge(section_routes::<Testimonial>("/testimonials"))
        .merge(section_routes::<Faq>("/faqs"))
        .merge(section_routes::<ServiceOffering>("/services"))
        .merge(section_routes::<FeatureCard>("/feature-cards"))
        .merge(section_routes::<PortfolioImage>("/portfolio-images"))
        .route("/settings/:key", put(settings::upsert_setting))
        .route("/featured/projects", put(featured::update_featured_projects))
        .route(
            "/featured/achievements",
            put(featured::update_featured_achievements),
        )
        .route("/media/project-folder", post(media::project_folder))
        .route(
            "/media",
            post(media::upload_images)
                .delete(media::delete_image)
                .layer(DefaultBodyLimit::max(
                    max_image_bytes * MAX_FILES_PER_UPLOAD + FORM_OVERHEAD_BYTES,
                )),
        )
}

/// Admin CRUD for one section record type
fn section_routes<T>(base: &str) -> Router<AppState>
where
    T: SectionContent,
    T::Create: DeserializeOwned + Validate,
    T::Update: DeserializeOwned + Validate,
    T::Response: Serialize,
{
    Router::new()
        .route(
            base,
            get(sections::list_admin::<T>).post(sections::create::<T>),
        )
        .route(
            &format!("{base}/:id"),
            patch(sections::update::<T>).delete(sections::delete::<T>),
        )
}
