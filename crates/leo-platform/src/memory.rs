//! In-memory object storage
//!
//! Used by the tools' `--dry-run` mode and by tests. Behaves like the hosted
//! bucket for the operations this workspace uses: uploads refuse to overwrite
//! unless `upsert` is set, removal of unknown paths is not an error.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use leo_core::traits::{BucketInfo, ObjectStorage, RepoResult, StoredObject, UploadObject};
use leo_core::value_objects::storage_path::public_object_url;
use leo_core::DomainError;

/// A stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub cache_control_secs: u32,
}

/// [`ObjectStorage`] that keeps objects in a map
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    base_url: String,
    bucket: String,
    public: bool,
    objects: Arc<RwLock<BTreeMap<String, MemoryObject>>>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: bucket.into(),
            public: true,
            objects: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Report the bucket as private
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    pub async fn get(&self, path: &str) -> Option<MemoryObject> {
        self.objects.read().await.get(path).cloned()
    }

    pub async fn contains(&self, path: &str) -> bool {
        self.objects.read().await.contains_key(path)
    }

    /// All stored paths, sorted
    pub async fn paths(&self) -> Vec<String> {
        self.objects.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(&self, object: UploadObject) -> RepoResult<StoredObject> {
        let mut objects = self.objects.write().await;
        if !object.upsert && objects.contains_key(&object.path) {
            return Err(DomainError::ObjectExists(object.path));
        }

        objects.insert(
            object.path.clone(),
            MemoryObject {
                bytes: object.bytes,
                content_type: object.content_type,
                cache_control_secs: object.cache_control_secs,
            },
        );
        Ok(StoredObject { path: object.path })
    }

    async fn remove(&self, paths: &[String]) -> RepoResult<()> {
        let mut objects = self.objects.write().await;
        for path in paths {
            objects.remove(path);
        }
        Ok(())
    }

    async fn list(&self, prefix: &str) -> RepoResult<Vec<String>> {
        let prefix = prefix.trim_matches('/');
        let lead = if prefix.is_empty() {
            String::new()
        } else {
            format!("{prefix}/")
        };

        let objects = self.objects.read().await;
        let names: BTreeSet<String> = objects
            .keys()
            .filter_map(|path| path.strip_prefix(&lead))
            .filter_map(|rest| rest.split('/').next())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        Ok(names.into_iter().collect())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn public_url(&self, path: &str) -> String {
        public_object_url(&self.base_url, &self.bucket, path)
    }

    async fn bucket_info(&self) -> RepoResult<BucketInfo> {
        Ok(BucketInfo {
            name: self.bucket.clone(),
            public: self.public,
        })
    }
}
