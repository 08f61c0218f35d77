//! Registry trait for fetching package metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageMetadata;

/// Trait for fetching package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the metadata document for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "@types/node")
    ///
    /// # Returns
    /// * `Ok(Some(PackageMetadata))` - The registry answered with package data
    /// * `Ok(None)` - No data: empty package name or a non-success status
    /// * `Err(RegistryError)` - The registry could not be reached or sent garbage
    async fn fetch_package_metadata(
        &self,
        package_name: &str,
    ) -> Result<Option<PackageMetadata>, RegistryError>;
}
