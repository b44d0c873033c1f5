//! Hosted platform ports - object storage and password auth

use async_trait::async_trait;

use super::RepoResult;
use crate::entities::Session;

/// An object to upload
#[derive(Debug, Clone)]
pub struct UploadObject {
    /// Path inside the bucket
    pub path: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub cache_control_secs: u32,
    /// Overwrite an existing object instead of failing
    pub upsert: bool,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
}

/// Bucket metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketInfo {
    pub name: String,
    pub public: bool,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload an object; fails with `DomainError::ObjectExists` when the path
    /// is taken and `upsert` is false
    async fn upload(&self, object: UploadObject) -> RepoResult<StoredObject>;

    /// Remove objects by path
    async fn remove(&self, paths: &[String]) -> RepoResult<()>;

    /// Names of the entries directly under `prefix`
    async fn list(&self, prefix: &str) -> RepoResult<Vec<String>>;

    /// Name of the bucket objects are stored in
    fn bucket(&self) -> &str;

    /// Public URL of an object. Pure string concatenation, no request.
    fn public_url(&self, path: &str) -> String;

    /// Bucket metadata
    async fn bucket_info(&self) -> RepoResult<BucketInfo>;
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Password sign-in
    async fn sign_in_with_password(&self, email: &str, password: &str) -> RepoResult<Session>;

    /// Revoke the session behind `access_token`
    async fn sign_out(&self, access_token: &str) -> RepoResult<()>;

    /// Resolve the user behind `access_token`
    async fn get_user(&self, access_token: &str) -> RepoResult<Session>;
}
