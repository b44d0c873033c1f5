//! Image migration from the site's public directory into the bucket

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use leo_core::value_objects::storage_path::{is_image_file, mime_type_for, sanitize_filename};
use leo_core::{ImageFolder, ObjectStorage, UploadObject};

use crate::report::{
    FailedFile, MigratedFile, MigratedFolder, MigratedImage, MigrationReport, SkippedFile,
};

/// Files that stay in the public directory
pub const KEEP_IN_PUBLIC: [&str; 12] = [
    "wide-impact.jpg",
    "feature-1.jpg",
    "feature-2.jpg",
    "project-1.jpg",
    "project-2.jpg",
    "project-3.jpg",
    "gallery-1.jpg",
    "gallery-2.jpg",
    "gallery-3.jpg",
    "gallery-4.jpg",
    "gallery-5.jpg",
    ".gitkeep",
];

/// Subdirectory holding one folder per project
pub const PROJECTS_DIR: &str = "projects";

/// Subdirectory holding achievement images
pub const ACHIEVEMENTS_DIR: &str = "Achivements images";

const CACHE_CONTROL_SECS: u32 = 3600;

/// Uploads every image under a public directory, one file at a time
pub struct ImageMigrator<'a> {
    storage: &'a dyn ObjectStorage,
    public_dir: PathBuf,
}

impl<'a> ImageMigrator<'a> {
    pub fn new(storage: &'a dyn ObjectStorage, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            public_dir: public_dir.into(),
        }
    }

    /// Migrate members, project folders and achievements. Per-file failures
    /// are recorded in the report and the batch continues.
    pub async fn run(&self) -> anyhow::Result<MigrationReport> {
        let mut report = MigrationReport::default();
        self.migrate_members(&mut report).await?;
        self.migrate_projects(&mut report).await;
        self.migrate_achievements(&mut report).await;
        Ok(report)
    }

    async fn migrate_members(&self, report: &mut MigrationReport) -> anyhow::Result<()> {
        info!(dir = %self.public_dir.display(), "Migrating member images");

        for LocalEntry { name, path, kind } in read_dir_sorted(&self.public_dir).await? {
            if KEEP_IN_PUBLIC.contains(&name.as_str()) {
                report.skipped.push(SkippedFile {
                    file: name,
                    reason: "Static asset (kept in public/)".to_string(),
                });
                continue;
            }
            if kind != EntryKind::File || !is_image_file(&name) {
                continue;
            }

            let sanitized = sanitize_filename(&name);
            match self.upload(&path, ImageFolder::Members, &sanitized).await {
                Ok(url) => {
                    info!(file = %name, %url, "Uploaded");
                    report.members.push(MigratedFile {
                        original: name,
                        uploaded: sanitized,
                        url,
                        local_path: path,
                    });
                }
                Err(error) => {
                    warn!(file = %name, %error, "Upload failed");
                    report.errors.push(FailedFile { file: name, error });
                }
            }
        }
        Ok(())
    }

    async fn migrate_projects(&self, report: &mut MigrationReport) {
        let projects_dir = self.public_dir.join(PROJECTS_DIR);
        let folders = match read_dir_sorted(&projects_dir).await {
            Ok(folders) => folders,
            Err(_) => {
                warn!(dir = %projects_dir.display(), "Projects folder not found or empty");
                return;
            }
        };

        for LocalEntry {
            name: folder,
            path: folder_path,
            kind,
        } in folders
        {
            if kind != EntryKind::Dir {
                continue;
            }
            info!(%folder, "Processing project folder");
            let folder_sanitized = sanitize_filename(&folder);

            let images = match read_dir_sorted(&folder_path).await {
                Ok(images) => images,
                Err(e) => {
                    report.errors.push(FailedFile {
                        file: folder.clone(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let mut uploaded = Vec::new();
            for LocalEntry {
                name: image,
                path: image_path,
                kind,
            } in images
            {
                if kind != EntryKind::File || !is_image_file(&image) {
                    continue;
                }
                let image_sanitized = sanitize_filename(&image);
                let storage_name = format!("{folder_sanitized}/{image_sanitized}");

                match self
                    .upload(&image_path, ImageFolder::Projects, &storage_name)
                    .await
                {
                    Ok(url) => uploaded.push(MigratedImage {
                        original: image,
                        uploaded: image_sanitized,
                        url,
                    }),
                    Err(error) => {
                        warn!(file = %image, %error, "Upload failed");
                        report.errors.push(FailedFile {
                            file: format!("{folder}/{image}"),
                            error,
                        });
                    }
                }
            }

            if !uploaded.is_empty() {
                report.projects.push(MigratedFolder {
                    folder,
                    folder_sanitized,
                    images: uploaded,
                    local_path: folder_path,
                });
            }
        }
    }

    async fn migrate_achievements(&self, report: &mut MigrationReport) {
        let dir = self.public_dir.join(ACHIEVEMENTS_DIR);
        let files = match read_dir_sorted(&dir).await {
            Ok(files) => files,
            Err(_) => {
                warn!(dir = %dir.display(), "Achievements folder not found or empty");
                return;
            }
        };

        for LocalEntry { name, path, kind } in files {
            if kind != EntryKind::File || !is_image_file(&name) {
                continue;
            }
            let sanitized = sanitize_filename(&name);
            match self.upload(&path, ImageFolder::Achievements, &sanitized).await {
                Ok(url) => report.achievements.push(MigratedFile {
                    original: name,
                    uploaded: sanitized,
                    url,
                    local_path: path,
                }),
                Err(error) => {
                    warn!(file = %name, %error, "Upload failed");
                    report.errors.push(FailedFile { file: name, error });
                }
            }
        }
    }

    /// Upload one file, returning its public URL or the error message
    async fn upload(&self, path: &Path, folder: ImageFolder, name: &str) -> Result<String, String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| e.to_string())?;
        let object = UploadObject {
            path: format!("{folder}/{name}"),
            bytes,
            content_type: mime_type_for(name).to_string(),
            cache_control_secs: CACHE_CONTROL_SECS,
            upsert: false,
        };

        let stored = self.storage.upload(object).await.map_err(|e| e.to_string())?;
        Ok(self.storage.public_url(&stored.path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    Other,
}

#[derive(Debug)]
struct LocalEntry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
}

/// Directory entries sorted by name. Symlinks are followed.
async fn read_dir_sorted(dir: &Path) -> std::io::Result<Vec<LocalEntry>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut out = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let kind = match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            _ => EntryKind::Other,
        };
        out.push(LocalEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            kind,
        });
    }
    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}

/// Result of deleting migrated local files
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub deleted: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Delete the local copies of everything the report lists as uploaded
pub async fn cleanup(report: &MigrationReport) -> anyhow::Result<CleanupSummary> {
    let mut summary = CleanupSummary::default();

    let files = report
        .members
        .iter()
        .chain(&report.achievements)
        .map(|f| f.local_path.clone());
    for path in files {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => summary.deleted.push(path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => summary.missing.push(path),
            Err(e) => return Err(e.into()),
        }
    }

    for folder in &report.projects {
        let path = folder.local_path.clone();
        match tokio::fs::remove_dir_all(&path).await {
            Ok(()) => summary.deleted.push(path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => summary.missing.push(path),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(summary)
}

/// Map from site-relative image path (as the frontend referenced it) to uploaded URL
pub fn url_map(report: &MigrationReport) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for member in &report.members {
        map.insert(format!("/{}", member.original).to_lowercase(), member.url.clone());
    }
    for achievement in &report.achievements {
        map.insert(
            format!("/{ACHIEVEMENTS_DIR}/{}", achievement.original).to_lowercase(),
            achievement.url.clone(),
        );
    }
    for project in &report.projects {
        for image in &project.images {
            map.insert(
                format!("/{PROJECTS_DIR}/{}/{}", project.folder, image.original).to_lowercase(),
                image.url.clone(),
            );
        }
    }
    map
}

/// Replace every string in `value` that names a migrated local image.
/// Matching ignores case. Returns the number of replacements.
pub fn rewrite_urls(value: &mut Value, urls: &HashMap<String, String>) -> usize {
    match value {
        Value::String(s) => match urls.get(&s.to_lowercase()) {
            Some(url) => {
                *s = url.clone();
                1
            }
            None => 0,
        },
        Value::Array(items) => items.iter_mut().map(|v| rewrite_urls(v, urls)).sum(),
        Value::Object(map) => map.values_mut().map(|v| rewrite_urls(v, urls)).sum(),
        _ => 0,
    }
}
