//! In-memory repositories for command tests

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use leo_core::{
    ContentRecord, ContentRepository, DomainError, Project, ProjectRepository, RepoResult,
    SiteSetting, SiteSettingRepository,
};

#[derive(Default, Clone)]
pub struct MemoryProjects {
    rows: Arc<RwLock<Vec<Project>>>,
    fail_title: Option<String>,
}

impl MemoryProjects {
    /// Reject inserts of a project with this title
    pub fn failing_on(mut self, title: &str) -> Self {
        self.fail_title = Some(title.to_string());
        self
    }

    pub async fn all(&self) -> Vec<Project> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjects {
    async fn list(&self) -> RepoResult<Vec<Project>> {
        Ok(self.all().await)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>> {
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, project: &Project) -> RepoResult<()> {
        if self.fail_title.as_deref() == Some(project.title.as_str()) {
            return Err(DomainError::DatabaseError("insert rejected".to_string()));
        }
        self.rows.write().await.push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> RepoResult<()> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|p| p.id == project.id) {
            Some(row) => {
                *row = project.clone();
                Ok(())
            }
            None => Err(DomainError::ProjectNotFound(project.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.rows.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let mut rows = self.rows.write().await;
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.rows.read().await.len() as i64)
    }
}

pub struct MemoryContent<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryContent<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: ContentRecord> MemoryContent<T> {
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl<T: ContentRecord> ContentRepository<T> for MemoryContent<T> {
    async fn list_active(&self) -> RepoResult<Vec<T>> {
        let mut rows = self.list_all().await?;
        rows.retain(|r| r.is_active());
        Ok(rows)
    }

    async fn list_all(&self) -> RepoResult<Vec<T>> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|r| r.display_order());
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<T>> {
        Ok(self.rows.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, record: &T) -> RepoResult<()> {
        self.rows.write().await.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &T) -> RepoResult<()> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id() == record.id()) {
            Some(row) => {
                *row = record.clone();
                Ok(())
            }
            None => Err(T::not_found(record.id())),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.rows.write().await.retain(|r| r.id() != id);
        Ok(())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let mut rows = self.rows.write().await;
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

#[derive(Default)]
pub struct MemorySettings {
    rows: RwLock<Vec<SiteSetting>>,
}

#[async_trait]
impl SiteSettingRepository for MemorySettings {
    async fn get(&self, key: &str) -> RepoResult<Option<SiteSetting>> {
        Ok(self.rows.read().await.iter().find(|s| s.key == key).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<SiteSetting>> {
        Ok(self.rows.read().await.clone())
    }

    async fn upsert(&self, setting: &SiteSetting) -> RepoResult<()> {
        let mut rows = self.rows.write().await;
        rows.retain(|s| s.key != setting.key);
        rows.push(setting.clone());
        Ok(())
    }
}
