//! Project entity - a completed club service project shown on the projects page

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Project entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    /// Free-text date shown on cards (e.g. "July 2025")
    pub date_text: String,
    pub category: Option<String>,
    pub description: String,
    pub image_url: String,
    /// Gallery image URLs, in display order
    pub gallery_images: Vec<String>,
    pub is_featured: bool,
    pub display_order: i32,
    /// Hand-assigned reference; the public listing is ordered by it, newest first
    pub project_ref: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a project as the admin form does: not featured, display order 0
    pub fn new(title: String, description: String, image_url: String, completion_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            date_text: format_date_text(completion_date),
            category: None,
            description,
            image_url,
            gallery_images: Vec::new(),
            is_featured: false,
            display_order: 0,
            project_ref: None,
            completion_date: Some(completion_date),
            created_at: Utc::now(),
        }
    }

    /// Set the completion date and the derived display date together
    pub fn set_completion_date(&mut self, date: NaiveDate) {
        self.completion_date = Some(date);
        self.date_text = format_date_text(date);
    }

    /// Number of gallery images
    #[inline]
    pub fn gallery_len(&self) -> usize {
        self.gallery_images.len()
    }

    /// Check if the project has a main image
    #[inline]
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}

/// Format a date the way project cards show it: "<Month> <YYYY>"
pub fn format_date_text(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
