//! Axum extractors for request handling
//!
//! Custom extractors for the admin session, validated JSON bodies, path
//! parameters and image upload forms.

mod auth;
mod path;
mod upload;
mod validated;

pub use auth::AdminSession;
pub use path::PathParam;
pub use upload::{ImageUpload, UploadedFile};
pub use validated::ValidatedJson;
