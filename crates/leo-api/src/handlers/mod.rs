//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod achievements;
pub mod admin_auth;
pub mod applications;
pub mod featured;
pub mod health;
pub mod home;
pub mod media;
pub mod projects;
pub mod sections;
pub mod settings;
