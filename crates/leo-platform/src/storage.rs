//! Object storage client
//!
//! All images live in one bucket; public URLs are derived by concatenation
//! and never requested from the platform.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use leo_core::traits::{BucketInfo, ObjectStorage, RepoResult, StoredObject, UploadObject};
use leo_core::value_objects::storage_path::public_object_url;
use leo_core::DomainError;

use crate::client::PlatformClient;

/// Page size for list requests
const LIST_LIMIT: u32 = 1000;

#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct BucketResponse {
    #[serde(default)]
    name: Option<String>,
    id: String,
    #[serde(default)]
    public: bool,
}

/// [`ObjectStorage`] backed by the platform storage API
#[derive(Debug, Clone)]
pub struct SupabaseStorage {
    client: PlatformClient,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(client: PlatformClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    #[instrument(skip(self, object), fields(path = %object.path, size = object.bytes.len()))]
    async fn upload(&self, object: UploadObject) -> RepoResult<StoredObject> {
        let response = self
            .client
            .request(
                Method::POST,
                &format!("/storage/v1/object/{}/{}", self.bucket, object.path),
            )
            .header("content-type", &object.content_type)
            .header("cache-control", format!("max-age={}", object.cache_control_secs))
            .header("x-upsert", if object.upsert { "true" } else { "false" })
            .body(object.bytes)
            .send()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        match PlatformClient::check_status(response).await {
            Ok(()) => {
                debug!("Object uploaded");
                Ok(StoredObject { path: object.path })
            }
            Err(e) if e.is_duplicate() => Err(DomainError::ObjectExists(object.path)),
            Err(e) => Err(e.into_storage_error()),
        }
    }

    #[instrument(skip(self))]
    async fn remove(&self, paths: &[String]) -> RepoResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .request(Method::DELETE, &format!("/storage/v1/object/{}", self.bucket))
            .json(&json!({ "prefixes": paths }))
            .send()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        PlatformClient::check_status(response)
            .await
            .map_err(crate::PlatformError::into_storage_error)
    }

    #[instrument(skip(self))]
    async fn list(&self, prefix: &str) -> RepoResult<Vec<String>> {
        let response = self
            .client
            .request(Method::POST, &format!("/storage/v1/object/list/{}", self.bucket))
            .json(&json!({
                "prefix": prefix,
                "limit": LIST_LIMIT,
                "offset": 0,
                "sortBy": { "column": "name", "order": "asc" },
            }))
            .send()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let entries: Vec<ListEntry> = PlatformClient::parse_response(response)
            .await
            .map_err(crate::PlatformError::into_storage_error)?;

        Ok(entries.into_iter().map(|e| e.name).collect())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn public_url(&self, path: &str) -> String {
        public_object_url(self.client.base_url(), &self.bucket, path)
    }

    #[instrument(skip(self))]
    async fn bucket_info(&self) -> RepoResult<BucketInfo> {
        let response = self
            .client
            .request(Method::GET, &format!("/storage/v1/bucket/{}", self.bucket))
            .send()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let bucket: BucketResponse = PlatformClient::parse_response(response)
            .await
            .map_err(crate::PlatformError::into_storage_error)?;

        Ok(BucketInfo {
            name: bucket.name.unwrap_or(bucket.id),
            public: bucket.public,
        })
    }
}
