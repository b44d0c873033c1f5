//! Platform client errors

use leo_core::DomainError;
use serde_json::Value;

/// Errors from the hosted platform REST layer
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The platform returned a non-2xx status code
    #[error("Platform API error ({status}): {message}")]
    Api {
        status: u16,
        /// Message extracted from the error body
        message: String,
        /// Error tag from the body (`error` field), when present
        error: Option<String>,
    },

    /// A success response that could not be decoded
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Result type for platform calls
pub type PlatformResult<T> = Result<T, PlatformError>;

impl PlatformError {
    /// Build an API error from a status code and a raw response body
    pub fn from_body(status: u16, body: &str) -> Self {
        let json = serde_json::from_str::<Value>(body).ok();
        let message = json
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.trim().to_string()
                }
            });
        let error = json
            .as_ref()
            .and_then(|v| v.get("error"))
            .and_then(Value::as_str)
            .map(String::from);

        // Storage reports some failures as 400 with the real code in the body
        let status = json
            .as_ref()
            .and_then(|v| v.get("statusCode"))
            .and_then(|code| match code {
                Value::String(s) => s.parse().ok(),
                Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
                _ => None,
            })
            .unwrap_or(status);

        Self::Api {
            status,
            message,
            error,
        }
    }

    /// Platform status code, if the platform answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Message text to show the caller
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check for "object already exists"
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::Api { status, error, .. } => {
                *status == 409 || error.as_deref().is_some_and(|e| e.eq_ignore_ascii_case("Duplicate"))
            }
            _ => false,
        }
    }

    /// Map a storage failure into the domain
    pub fn into_storage_error(self) -> DomainError {
        DomainError::StorageError(self.message())
    }

    /// Map an auth failure into the domain. Client errors (bad password,
    /// expired or unknown token) carry the platform message as
    /// `InvalidCredentials`.
    pub fn into_auth_error(self) -> DomainError {
        match self.status() {
            Some(400 | 401 | 403 | 422) => DomainError::InvalidCredentials(self.message()),
            _ => DomainError::AuthProviderError(self.message()),
        }
    }
}

fn extract_message(value: &Value) -> Option<String> {
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}
