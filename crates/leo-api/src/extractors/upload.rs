//! Multipart image upload extractor
//!
//! Form fields: one or more `file` parts, `folder`, and the optional
//! `subfolder` and `file_name`.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use leo_core::ImageFolder;
use leo_service::dto::UploadImageRequest;

use crate::response::ApiError;

/// One file part of the form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Parsed image upload form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub folder: ImageFolder,
    pub subfolder: Option<String>,
    pub file_name: Option<String>,
    pub files: Vec<UploadedFile>,
}

impl ImageUpload {
    /// Upload requests for the service layer.
    ///
    /// A custom `file_name` only applies to a single-file upload.
    pub fn into_requests(self) -> Vec<UploadImageRequest> {
        let custom_name = if self.files.len() == 1 {
            self.file_name
        } else {
            None
        };

        self.files
            .into_iter()
            .map(|file| UploadImageRequest {
                folder: self.folder,
                subfolder: self.subfolder.clone(),
                original_name: file.original_name,
                custom_name: custom_name.clone(),
                content_type: file.content_type,
                bytes: file.bytes,
            })
            .collect()
    }
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let mut folder = None;
        let mut subfolder = None;
        let mut file_name = None;
        let mut files = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let original_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                    files.push(UploadedFile {
                        original_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                "folder" | "subfolder" | "file_name" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                    let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
                    match name.as_str() {
                        "folder" => folder = value,
                        "subfolder" => subfolder = value,
                        _ => file_name = value,
                    }
                }
                other => {
                    tracing::debug!(field = %other, "Ignoring unknown upload field");
                }
            }
        }

        let folder = folder
            .ok_or_else(|| ApiError::invalid_body("folder is required"))?
            .parse::<ImageFolder>()
            .map_err(ApiError::invalid_body)?;

        if files.is_empty() {
            return Err(ApiError::invalid_body("file is required"));
        }

        Ok(Self {
            folder,
            subfolder,
            file_name,
            files,
        })
    }
}
