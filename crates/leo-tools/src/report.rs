//! Image migration report
//!
//! Written by `migrate-images` and read back by `cleanup` and `rewrite-urls`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigratedFile {
    pub original: String,
    pub uploaded: String,
    pub url: String,
    #[serde(alias = "localPath")]
    pub local_path: PathBuf,
}

/// An image inside a migrated project folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigratedImage {
    pub original: String,
    pub uploaded: String,
    pub url: String,
}

/// A project folder with at least one uploaded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigratedFolder {
    pub folder: String,
    #[serde(alias = "folderSanitized")]
    pub folder_sanitized: String,
    pub images: Vec<MigratedImage>,
    #[serde(alias = "localPath")]
    pub local_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Field names written by earlier migration runs (`localPath`,
/// `folderSanitized`) are accepted on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationReport {
    pub members: Vec<MigratedFile>,
    pub projects: Vec<MigratedFolder>,
    pub achievements: Vec<MigratedFile>,
    pub errors: Vec<FailedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl MigrationReport {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    pub fn project_image_count(&self) -> usize {
        self.projects.iter().map(|p| p.images.len()).sum()
    }

    /// Human readable summary
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&"=".repeat(60));
        out.push_str("\nMIGRATION SUMMARY\n");
        out.push_str(&"=".repeat(60));
        out.push('\n');
        out.push_str(&format!("Member images:       {} uploaded\n", self.members.len()));
        out.push_str(&format!("Project folders:     {} folders\n", self.projects.len()));
        out.push_str(&format!(
            "Project images:      {} uploaded\n",
            self.project_image_count()
        ));
        out.push_str(&format!(
            "Achievement images:  {} uploaded\n",
            self.achievements.len()
        ));
        out.push_str(&format!(
            "Skipped files:       {} (kept in public/)\n",
            self.skipped.len()
        ));
        out.push_str(&format!("Errors:              {}\n", self.errors.len()));
        out.push_str(&"=".repeat(60));

        if !self.errors.is_empty() {
            out.push_str("\n\nErrors:");
            for err in &self.errors {
                out.push_str(&format!("\n  - {}: {}", err.file, err.error));
            }
        }
        out
    }
}
