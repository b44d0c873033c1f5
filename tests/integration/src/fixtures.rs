//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        COUNTER.fetch_add(1, Ordering::SeqCst),
        uuid::Uuid::new_v4().simple()
    )
}

/// Admin login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin session response
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: AdminUser,
}

#[derive(Debug, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
}

/// Project create body with a unique title
pub fn project_body(title: &str) -> Value {
    json!({
        "title": format!("{title} {}", unique_suffix()),
        "description": "Lunch and a health camp at the elders' home",
        "category": "Senior Citizens Development",
        "image_url": "https://demo.supabase.co/storage/v1/object/public/images/projects/cover.jpg",
        "gallery_images": ["3.jpg", "1.jpg", "2.jpg"],
        "completion_date": "2025-07-10"
    })
}

/// Project response
#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: Option<String>,
    pub image_url: String,
    pub gallery_images: Vec<String>,
    pub is_featured: bool,
    pub display_order: i32,
}

/// Featured project entry
#[derive(Debug, Deserialize)]
pub struct FeaturedProjectResponse {
    pub id: String,
    pub title: String,
    pub featured_order: i32,
}

/// Membership application body
pub fn application_body(consent: bool) -> Value {
    json!({
        "full_name": "  Nimal Perera ",
        "email": format!("Applicant.{}@Example.com", unique_suffix()),
        "phone": "0771234567",
        "age": 19,
        "organization": "",
        "motivation": "I want to serve my community.",
        "consent": consent
    })
}

/// Application receipt
#[derive(Debug, Deserialize)]
pub struct ApplicationReceipt {
    pub id: String,
    pub status: String,
    pub message: String,
}

/// Stored application as the admin sees it
#[derive(Debug, Deserialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub organization: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub reviewer_email: Option<String>,
}

/// Upload response
#[derive(Debug, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    pub path: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}
