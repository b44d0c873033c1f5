//! Media service
//!
//! Image uploads into the bucket's folders and removal by public URL.

use chrono::Utc;
use futures::future::try_join_all;
use leo_core::traits::UploadObject;
use leo_core::value_objects::storage_path::{
    custom_file_name, file_extension, generated_file_name, object_path,
    object_path_from_public_url, project_folder_name, sanitize_filename,
};
use leo_core::{DomainError, Session};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::dto::{
    ProjectFolderRequest, ProjectFolderResponse, UploadImageRequest, UploadedImageResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Extension used when the original file name has none
const DEFAULT_EXTENSION: &str = "jpg";

/// Length of the random part of generated file names
const SUFFIX_LEN: usize = 6;

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upload one image and return its public URL and bucket path
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id, folder = %request.folder))]
    pub async fn upload_image(
        &self,
        session: &Session,
        request: UploadImageRequest,
    ) -> ServiceResult<UploadedImageResponse> {
        self.ctx.authorize_admin(session)?;
        self.check_image(&request)?;
        self.store(request).await
    }

    /// Upload several images; fails on the first failed upload
    #[instrument(skip(self, session, requests), fields(user_id = %session.user_id, count = requests.len()))]
    pub async fn upload_images(
        &self,
        session: &Session,
        requests: Vec<UploadImageRequest>,
    ) -> ServiceResult<Vec<UploadedImageResponse>> {
        self.ctx.authorize_admin(session)?;
        for request in &requests {
            self.check_image(request)?;
        }

        try_join_all(requests.into_iter().map(|request| self.store(request))).await
    }

    /// Remove an image by its public URL.
    ///
    /// Returns `false` when the URL does not point into this bucket or the
    /// removal fails.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete_image(&self, session: &Session, url: &str) -> ServiceResult<bool> {
        self.ctx.authorize_admin(session)?;

        let storage = self.ctx.storage();
        let Some(path) = object_path_from_public_url(url, storage.bucket()) else {
            warn!(url = %url, "Not an image URL of this bucket");
            return Ok(false);
        };

        match storage.remove(std::slice::from_ref(&path)).await {
            Ok(()) => {
                info!(path = %path, "Image deleted");
                Ok(true)
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Image delete failed");
                Ok(false)
            }
        }
    }

    /// Storage folder for a project's images
    pub fn project_folder(request: &ProjectFolderRequest) -> ProjectFolderResponse {
        ProjectFolderResponse {
            folder: project_folder_name(&request.title, request.date),
        }
    }

    fn check_image(&self, request: &UploadImageRequest) -> ServiceResult<()> {
        if !request.content_type.starts_with("image/") {
            return Err(DomainError::NotAnImage.into());
        }
        if request.bytes.len() > self.ctx.media().max_image_bytes() {
            return Err(DomainError::ImageTooLarge {
                max_mb: self.ctx.media().max_image_size_mb,
            }
            .into());
        }
        Ok(())
    }

    async fn store(&self, request: UploadImageRequest) -> ServiceResult<UploadedImageResponse> {
        let ext = file_extension(&request.original_name)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let file_name = match request
            .custom_name
            .as_deref()
            .map(sanitize_filename)
            .filter(|name| !name.is_empty())
        {
            Some(base) => custom_file_name(&base, &ext),
            None => generated_file_name(&ext, Utc::now().timestamp_millis(), &random_suffix()),
        };

        let subfolder = request.subfolder.as_deref().map(sanitize_filename);
        let path = object_path(request.folder, subfolder.as_deref(), &file_name);

        let stored = self
            .ctx
            .storage()
            .upload(UploadObject {
                path,
                bytes: request.bytes,
                content_type: request.content_type,
                cache_control_secs: self.ctx.media().cache_control_secs,
                upsert: false,
            })
            .await?;

        info!(path = %stored.path, "Image uploaded");

        Ok(UploadedImageResponse {
            url: self.ctx.storage().public_url(&stored.path),
            path: stored.path,
        })
    }
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}
