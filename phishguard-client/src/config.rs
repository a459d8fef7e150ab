use crate::error::{Result, ServiceError};
use url::Url;

/// Where the classification service lives unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Resolved location of the classification service.
///
/// The base is kept without a trailing slash so endpoint names can be
/// appended verbatim; `Url::join` would drop the last path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ServiceError::InvalidBaseUrl(format!("{}: {}", trimmed, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ServiceError::InvalidBaseUrl(format!(
                    "{}: unsupported scheme '{}'",
                    trimmed, other
                )));
            }
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a named endpoint under the base, e.g. `predict`.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.trim_start_matches('/'))
    }

    pub fn predict_url(&self) -> String {
        self.endpoint("predict")
    }

    pub fn health_url(&self) -> String {
        self.endpoint("health")
    }

    pub fn model_info_url(&self) -> String {
        self.endpoint("model-info")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
