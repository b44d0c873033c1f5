//! In-memory ports for service tests
//!
//! Every fake counts its calls through a shared counter so tests can assert
//! that a rejected operation never reached a repository or the bucket.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use leo_common::StorageConfig;
use leo_core::entities::{
    Achievement, BoardMember, ContentRecord, Faq, FeatureCard, FeaturedAchievement,
    FeaturedProject, MembershipApplication, PortfolioImage, Project, ServiceOffering, Session,
    SiteSetting, Testimonial,
};
use leo_core::traits::{
    AchievementRepository, AuthProvider, BucketInfo, ContentRepository, FeaturedRepository,
    MembershipApplicationRepository, ObjectStorage, ProjectRepository, RepoResult,
    SiteSettingRepository, StoredObject, UploadObject,
};
use leo_core::{AdminPolicy, ApplicationStatus, DomainError};
use leo_platform::MemoryStorage;
use leo_service::ServiceContext;

pub const ADMIN_EMAIL: &str = "admin@leoparadise.org";
pub const ADMIN_PASSWORD: &str = "correct-horse";
pub const MEMBER_EMAIL: &str = "member@leoparadise.org";
pub const BASE_URL: &str = "https://demo.supabase.co";
pub const BUCKET: &str = "images";

/// Shared call counter
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn admin_session() -> Session {
    Session::new(Uuid::new_v4(), Some("Admin@LeoParadise.org".into()), "admin-token".into())
}

pub fn member_session() -> Session {
    Session::new(Uuid::new_v4(), Some(MEMBER_EMAIL.into()), "member-token".into())
}

pub fn anonymous_session() -> Session {
    Session::new(Uuid::new_v4(), None, "anon-token".into())
}

// ============================================================================
// Repositories
// ============================================================================

pub struct MemoryProjects {
    calls: Calls,
    pub rows: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectRepository for MemoryProjects {
    async fn list(&self) -> RepoResult<Vec<Project>> {
        self.calls.hit();
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| {
            b.project_ref
                .is_some()
                .cmp(&a.project_ref.is_some())
                .then_with(|| b.project_ref.cmp(&a.project_ref))
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>> {
        self.calls.hit();
        Ok(self.rows.lock().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, project: &Project) -> RepoResult<()> {
        self.calls.hit();
        self.rows.lock().await.push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> RepoResult<()> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(DomainError::ProjectNotFound(project.id))?;
        *row = project.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(DomainError::ProjectNotFound(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let n = rows.len() as u64;
        rows.clear();
        Ok(n)
    }

    async fn count(&self) -> RepoResult<i64> {
        self.calls.hit();
        Ok(self.rows.lock().await.len() as i64)
    }
}

pub struct MemoryAchievements {
    calls: Calls,
    pub rows: Mutex<Vec<Achievement>>,
}

#[async_trait]
impl AchievementRepository for MemoryAchievements {
    async fn list(&self) -> RepoResult<Vec<Achievement>> {
        self.calls.hit();
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Achievement>> {
        self.calls.hit();
        Ok(self.rows.lock().await.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, achievement: &Achievement) -> RepoResult<()> {
        self.calls.hit();
        self.rows.lock().await.push(achievement.clone());
        Ok(())
    }

    async fn update(&self, achievement: &Achievement) -> RepoResult<()> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|a| a.id == achievement.id)
            .ok_or(DomainError::AchievementNotFound(achievement.id))?;
        *row = achievement.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.calls.hit();
        self.rows.lock().await.retain(|a| a.id != id);
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        self.calls.hit();
        Ok(self.rows.lock().await.len() as i64)
    }
}

pub struct MemoryContent<T> {
    calls: Calls,
    pub rows: Mutex<Vec<T>>,
    /// Make reads fail, to exercise degraded pages
    pub broken: bool,
}

#[async_trait]
impl<T: ContentRecord> ContentRepository<T> for MemoryContent<T> {
    async fn list_active(&self) -> RepoResult<Vec<T>> {
        self.calls.hit();
        if self.broken {
            return Err(DomainError::DatabaseError("connection reset".into()));
        }
        let mut rows: Vec<T> = self
            .rows
            .lock()
            .await
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.display_order());
        Ok(rows)
    }

    async fn list_all(&self) -> RepoResult<Vec<T>> {
        self.calls.hit();
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by_key(|r| r.display_order());
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<T>> {
        self.calls.hit();
        Ok(self.rows.lock().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, record: &T) -> RepoResult<()> {
        self.calls.hit();
        self.rows.lock().await.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &T) -> RepoResult<()> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| T::not_found(record.id()))?;
        *row = record.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        if rows.len() == before {
            return Err(T::not_found(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let n = rows.len() as u64;
        rows.clear();
        Ok(n)
    }
}

pub struct MemorySettings {
    calls: Calls,
    pub rows: Mutex<BTreeMap<String, SiteSetting>>,
}

#[async_trait]
impl SiteSettingRepository for MemorySettings {
    async fn get(&self, key: &str) -> RepoResult<Option<SiteSetting>> {
        self.calls.hit();
        Ok(self.rows.lock().await.get(key).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<SiteSetting>> {
        self.calls.hit();
        Ok(self.rows.lock().await.values().cloned().collect())
    }

    async fn upsert(&self, setting: &SiteSetting) -> RepoResult<()> {
        self.calls.hit();
        self.rows
            .lock()
            .await
            .insert(setting.key.clone(), setting.clone());
        Ok(())
    }
}

pub struct MemoryApplications {
    calls: Calls,
    pub rows: Mutex<Vec<MembershipApplication>>,
}

#[async_trait]
impl MembershipApplicationRepository for MemoryApplications {
    async fn create(&self, application: &MembershipApplication) -> RepoResult<()> {
        self.calls.hit();
        self.rows.lock().await.push(application.clone());
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<MembershipApplication>> {
        self.calls.hit();
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<MembershipApplication>> {
        self.calls.hit();
        Ok(self.rows.lock().await.iter().find(|a| a.id == id).cloned())
    }

    async fn update_review(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        admin_notes: Option<&str>,
        reviewer_email: &str,
    ) -> RepoResult<MembershipApplication> {
        self.calls.hit();
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::ApplicationNotFound(id))?;
        row.review(status, admin_notes.map(String::from), reviewer_email);
        Ok(row.clone())
    }
}

/// Featured lists resolved against the project/achievement fakes
pub struct MemoryFeatured {
    calls: Calls,
    projects: Arc<MemoryProjects>,
    achievements: Arc<MemoryAchievements>,
    pub project_ids: Mutex<Vec<Uuid>>,
    pub achievement_ids: Mutex<Vec<Uuid>>,
    pub replace_calls: AtomicUsize,
}

#[async_trait]
impl FeaturedRepository for MemoryFeatured {
    async fn list_projects(&self) -> RepoResult<Vec<FeaturedProject>> {
        self.calls.hit();
        let ids = self.project_ids.lock().await.clone();
        let rows = self.projects.rows.lock().await;
        Ok(ids
            .iter()
            .enumerate()
            .filter_map(|(i, id)| {
                rows.iter().find(|p| p.id == *id).map(|p| FeaturedProject {
                    project: p.clone(),
                    featured_order: i as i32,
                })
            })
            .collect())
    }

    async fn list_achievements(&self) -> RepoResult<Vec<FeaturedAchievement>> {
        self.calls.hit();
        let ids = self.achievement_ids.lock().await.clone();
        let rows = self.achievements.rows.lock().await;
        Ok(ids
            .iter()
            .enumerate()
            .filter_map(|(i, id)| {
                rows.iter().find(|a| a.id == *id).map(|a| FeaturedAchievement {
                    achievement: a.clone(),
                    featured_order: i as i32,
                })
            })
            .collect())
    }

    async fn replace_projects(&self, ids: &[Uuid]) -> RepoResult<()> {
        self.calls.hit();
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        *self.project_ids.lock().await = ids.to_vec();
        Ok(())
    }

    async fn replace_achievements(&self, ids: &[Uuid]) -> RepoResult<()> {
        self.calls.hit();
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        *self.achievement_ids.lock().await = ids.to_vec();
        Ok(())
    }
}

// ============================================================================
// Platform
// ============================================================================

/// Bucket wrapper that counts calls
pub struct CountingStorage {
    calls: Calls,
    pub inner: MemoryStorage,
    pub fail_removals: bool,
}

#[async_trait]
impl ObjectStorage for CountingStorage {
    async fn upload(&self, object: UploadObject) -> RepoResult<StoredObject> {
        self.calls.hit();
        self.inner.upload(object).await
    }

    async fn remove(&self, paths: &[String]) -> RepoResult<()> {
        self.calls.hit();
        if self.fail_removals {
            return Err(DomainError::StorageError("Object not found".into()));
        }
        self.inner.remove(paths).await
    }

    async fn list(&self, prefix: &str) -> RepoResult<Vec<String>> {
        self.calls.hit();
        self.inner.list(prefix).await
    }

    fn bucket(&self) -> &str {
        self.inner.bucket()
    }

    fn public_url(&self, path: &str) -> String {
        self.inner.public_url(path)
    }

    async fn bucket_info(&self) -> RepoResult<BucketInfo> {
        self.calls.hit();
        self.inner.bucket_info().await
    }
}

/// Password auth with two known accounts
#[derive(Default)]
pub struct FakeAuth {
    pub sign_ins: AtomicUsize,
    pub signed_out: Mutex<Vec<String>>,
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> RepoResult<Session> {
        self.sign_ins.fetch_add(1, Ordering::SeqCst);
        if password != ADMIN_PASSWORD {
            return Err(DomainError::InvalidCredentials(
                "Invalid login credentials".into(),
            ));
        }
        let token = format!("token-for-{email}");
        Ok(Session::new(Uuid::new_v4(), Some(email.to_string()), token))
    }

    async fn sign_out(&self, access_token: &str) -> RepoResult<()> {
        self.signed_out.lock().await.push(access_token.to_string());
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> RepoResult<Session> {
        Ok(Session::new(Uuid::new_v4(), None, access_token.to_string()))
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub ctx: ServiceContext,
    pub calls: Calls,
    pub projects: Arc<MemoryProjects>,
    pub achievements: Arc<MemoryAchievements>,
    pub board_members: Arc<MemoryContent<BoardMember>>,
    pub testimonials: Arc<MemoryContent<Testimonial>>,
    pub faqs: Arc<MemoryContent<Faq>>,
    pub settings: Arc<MemorySettings>,
    pub applications: Arc<MemoryApplications>,
    pub featured: Arc<MemoryFeatured>,
    pub storage: Arc<CountingStorage>,
    pub auth: Arc<FakeAuth>,
}

#[derive(Default)]
pub struct HarnessOptions {
    pub broken_testimonials: bool,
    pub fail_removals: bool,
}

fn content<T>(calls: &Calls, broken: bool) -> Arc<MemoryContent<T>> {
    Arc::new(MemoryContent {
        calls: calls.clone(),
        rows: Mutex::new(Vec::new()),
        broken,
    })
}

pub fn harness() -> Harness {
    harness_with(HarnessOptions::default())
}

pub fn harness_with(options: HarnessOptions) -> Harness {
    let calls = Calls::default();

    let projects = Arc::new(MemoryProjects {
        calls: calls.clone(),
        rows: Mutex::new(Vec::new()),
    });
    let achievements = Arc::new(MemoryAchievements {
        calls: calls.clone(),
        rows: Mutex::new(Vec::new()),
    });
    let board_members = content::<BoardMember>(&calls, false);
    let testimonials = content::<Testimonial>(&calls, options.broken_testimonials);
    let faqs = content::<Faq>(&calls, false);
    let services = content::<ServiceOffering>(&calls, false);
    let feature_cards = content::<FeatureCard>(&calls, false);
    let portfolio = content::<PortfolioImage>(&calls, false);
    let settings = Arc::new(MemorySettings {
        calls: calls.clone(),
        rows: Mutex::new(BTreeMap::new()),
    });
    let applications = Arc::new(MemoryApplications {
        calls: calls.clone(),
        rows: Mutex::new(Vec::new()),
    });
    let featured = Arc::new(MemoryFeatured {
        calls: calls.clone(),
        projects: projects.clone(),
        achievements: achievements.clone(),
        project_ids: Mutex::new(Vec::new()),
        achievement_ids: Mutex::new(Vec::new()),
        replace_calls: AtomicUsize::new(0),
    });
    let storage = Arc::new(CountingStorage {
        calls: calls.clone(),
        inner: MemoryStorage::new(BASE_URL, BUCKET),
        fail_removals: options.fail_removals,
    });
    let auth = Arc::new(FakeAuth::default());

    let ctx = ServiceContext::builder()
        .project_repo(projects.clone())
        .achievement_repo(achievements.clone())
        .board_member_repo(board_members.clone())
        .testimonial_repo(testimonials.clone())
        .faq_repo(faqs.clone())
        .service_repo(services)
        .feature_card_repo(feature_cards)
        .portfolio_image_repo(portfolio)
        .setting_repo(settings.clone())
        .application_repo(applications.clone())
        .featured_repo(featured.clone())
        .storage(storage.clone())
        .auth(auth.clone())
        .admin_policy(AdminPolicy::new(ADMIN_EMAIL))
        .media(StorageConfig {
            max_image_size_mb: 1,
            cache_control_secs: 3600,
        })
        .build()
        .expect("context");

    Harness {
        ctx,
        calls,
        projects,
        achievements,
        board_members,
        testimonials,
        faqs,
        settings,
        applications,
        featured,
        storage,
        auth,
    }
}
