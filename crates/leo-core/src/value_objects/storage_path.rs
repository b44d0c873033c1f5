//! Object storage layout helpers
//!
//! All images live in a single bucket. Paths are built by concatenating a
//! top-level folder, an optional subfolder and a sanitized file name, and
//! public URLs are derived from the project URL by string concatenation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Path segment every public object URL contains
pub const PUBLIC_OBJECT_PREFIX: &str = "/storage/v1/object/public/";

/// Maximum length of the title part of a project folder name
const PROJECT_FOLDER_TITLE_LEN: usize = 30;

/// Extensions recognised as images by the migration tooling
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Top-level folders of the image bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFolder {
    Members,
    Projects,
    Achievements,
    BoardMembers,
}

impl ImageFolder {
    /// Folder name inside the bucket
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::BoardMembers => "board-members",
        }
    }
}

impl fmt::Display for ImageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFolder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "members" => Ok(Self::Members),
            "projects" => Ok(Self::Projects),
            "achievements" => Ok(Self::Achievements),
            "board-members" => Ok(Self::BoardMembers),
            other => Err(format!("Unknown image folder: {other}")),
        }
    }
}

/// Sanitize a file or folder name for storage.
///
/// Lowercases, turns whitespace runs into a single `-` and drops every
/// character outside `[a-z0-9.-]`. Sanitizing a sanitized name is a no-op.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-' {
            out.push(c);
        }
    }

    out
}

/// Build the storage folder for a project's images: `YYYYMMDD-<title-slug>`.
///
/// The slug keeps `[a-z0-9-]`, joins words with `-` and is cut at 30 characters.
pub fn project_folder_name(title: &str, date: NaiveDate) -> String {
    let filtered: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let slug: String = collapse_whitespace(&filtered)
        .chars()
        .take(PROJECT_FOLDER_TITLE_LEN)
        .collect();

    format!("{}-{}", date.format("%Y%m%d"), slug)
}

fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            out.push(c);
        }
    }
    out
}

/// Join folder, optional subfolder and file name into an object path
pub fn object_path(folder: ImageFolder, subfolder: Option<&str>, file_name: &str) -> String {
    match subfolder.map(str::trim).filter(|s| !s.is_empty()) {
        Some(sub) => format!("{folder}/{sub}/{file_name}"),
        None => format!("{folder}/{file_name}"),
    }
}

/// Extension of a file name (lowercased, without the dot)
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// File name for an upload without a custom name: `<millis>-<suffix>.<ext>`
pub fn generated_file_name(ext: &str, now_millis: i64, suffix: &str) -> String {
    format!("{now_millis}-{suffix}.{ext}")
}

/// File name for an upload with a caller-chosen base name
pub fn custom_file_name(base: &str, ext: &str) -> String {
    format!("{base}.{ext}")
}

/// Public URL of an object: `<base>/storage/v1/object/public/<bucket>/<path>`
pub fn public_object_url(base_url: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}{PUBLIC_OBJECT_PREFIX}{bucket}/{path}",
        base_url.trim_end_matches('/')
    )
}

/// Recover the object path from a public URL of `bucket`
pub fn object_path_from_public_url(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("{PUBLIC_OBJECT_PREFIX}{bucket}/");
    let start = url.find(&marker)? + marker.len();
    let path = &url[start..];
    (!path.is_empty()).then(|| path.to_string())
}

/// Check whether a URL points into the platform's public object storage
pub fn is_storage_url(url: &str) -> bool {
    url.contains(PUBLIC_OBJECT_PREFIX)
}

/// MIME type for an image file name, `application/octet-stream` otherwise
pub fn mime_type_for(file_name: &str) -> &'static str {
    match file_extension(file_name).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Check whether a file name has one of the image extensions
pub fn is_image_file(file_name: &str) -> bool {
    file_extension(file_name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
