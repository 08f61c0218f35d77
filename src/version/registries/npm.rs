//! npm registry API implementation

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT_MS, default_registry};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::PackageMetadata;

/// Registry implementation for npm registry API
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("scaffold-cli/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(default_registry(false))
    }
}

/// Joins a base URL and a path segment with exactly one slash between them.
pub fn join_url(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    match (base.is_empty(), segment.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => segment.to_string(),
        (false, false) => format!("{}/{}", base, segment),
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_package_metadata(
        &self,
        package_name: &str,
    ) -> Result<Option<PackageMetadata>, RegistryError> {
        if package_name.is_empty() {
            return Ok(None);
        }

        let encoded_name = Self::encode_package_name(package_name);
        let url = join_url(&self.base_url, &encoded_name);

        debug!("Fetching package metadata: {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RegistryError::Unreachable)?;

        let status = response.status();

        if status != reqwest::StatusCode::OK {
            warn!("npm registry returned status {}: {}", status, url);
            return Ok(None);
        }

        let body = response.text().await.map_err(RegistryError::Unreachable)?;

        let metadata: PackageMetadata = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!(
            "Fetched {} versions for {}",
            metadata.versions.len(),
            package_name
        );

        Ok(Some(metadata))
    }
}
