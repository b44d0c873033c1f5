//! Credential resolution for the maintenance tools
//!
//! The tools read `.env` style files without exporting them into the process
//! environment, so several files can be consulted in a fixed order.
//! Precedence: command-line flags, then the process environment, then each
//! env file in the order given.

use std::collections::HashMap;
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::ConfigError;

const URL_VARS: [&str; 2] = ["SUPABASE_URL", "VITE_SUPABASE_URL"];
const ANON_KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];
const SERVICE_KEY_VARS: [&str; 2] = ["SUPABASE_SERVICE_ROLE_KEY", "VITE_SUPABASE_SERVICE_ROLE_KEY"];
const DATABASE_URL_VARS: [&str; 1] = ["DATABASE_URL"];

/// Parsed `key=value` file
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    path: PathBuf,
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Load a file, returning `None` when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let iter = dotenvy::from_path_iter(path).map_err(|e| env_file_error(path, &e))?;
        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| env_file_error(path, &e))?;
            vars.insert(key, value);
        }

        Ok(Some(Self {
            path: path.to_path_buf(),
            vars,
        }))
    }

    /// Parse env-file content from a reader
    pub fn parse<R: Read>(name: &str, reader: R) -> Result<Self, ConfigError> {
        let path = PathBuf::from(name);
        let mut vars = HashMap::new();
        for item in dotenvy::from_read_iter(reader) {
            let (key, value) = item.map_err(|e| env_file_error(&path, &e))?;
            vars.insert(key, value);
        }
        Ok(Self { path, vars })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn env_file_error(path: &Path, err: &dotenvy::Error) -> ConfigError {
    ConfigError::EnvFile {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Ordered lookup over the process environment and env files
#[derive(Debug, Clone)]
pub struct EnvSources {
    files: Vec<EnvFile>,
    use_process_env: bool,
}

impl EnvSources {
    /// Process environment first, then `files` in order
    pub fn new(files: Vec<EnvFile>) -> Self {
        Self {
            files,
            use_process_env: true,
        }
    }

    /// Only `files`, ignoring the process environment
    pub fn isolated(files: Vec<EnvFile>) -> Self {
        Self {
            files,
            use_process_env: false,
        }
    }

    /// Load every existing file among `paths`; missing files are skipped
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        let mut files = Vec::new();
        for path in paths {
            if let Some(file) = EnvFile::load(path)? {
                files.push(file);
            }
        }
        Ok(Self::new(files))
    }

    pub fn files(&self) -> &[EnvFile] {
        &self.files
    }

    /// First non-empty value for any of `names`
    pub fn get(&self, names: &[&str]) -> Option<String> {
        if self.use_process_env {
            if let Some(value) = names
                .iter()
                .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
            {
                return Some(value);
            }
        }

        self.files.iter().find_map(|file| {
            names
                .iter()
                .find_map(|name| file.get(name).filter(|v| !v.trim().is_empty()))
                .map(String::from)
        })
    }
}

/// Which platform key a tool needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScope {
    /// Public key, subject to row level security
    Anon,
    /// Elevated key that bypasses row level security
    ServiceRole,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_key: Option<String>,
    pub database_url: Option<String>,
}

/// Resolved platform credentials
#[derive(Clone)]
pub struct Credentials {
    pub url: String,
    pub key: String,
    pub scope: CredentialScope,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Resolve the project URL and the key for `scope`
    pub fn resolve(
        scope: CredentialScope,
        overrides: &CredentialOverrides,
        sources: &EnvSources,
    ) -> Result<Self, ConfigError> {
        let url = pick(overrides.url.as_deref(), sources, &URL_VARS)
            .ok_or(ConfigError::MissingVar("SUPABASE_URL"))?;

        let key = match scope {
            CredentialScope::Anon => pick(overrides.anon_key.as_deref(), sources, &ANON_KEY_VARS)
                .ok_or(ConfigError::MissingVar("SUPABASE_ANON_KEY"))?,
            CredentialScope::ServiceRole => {
                pick(overrides.service_key.as_deref(), sources, &SERVICE_KEY_VARS)
                    .ok_or(ConfigError::MissingVar("SUPABASE_SERVICE_ROLE_KEY"))?
            }
        };

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            key,
            scope,
        })
    }

    /// Resolve the database connection string
    pub fn database_url(
        overrides: &CredentialOverrides,
        sources: &EnvSources,
    ) -> Result<String, ConfigError> {
        pick(overrides.database_url.as_deref(), sources, &DATABASE_URL_VARS)
            .ok_or(ConfigError::MissingVar("DATABASE_URL"))
    }
}

fn pick(flag: Option<&str>, sources: &EnvSources, names: &[&str]) -> Option<String> {
    flag.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .or_else(|| sources.get(names))
}
