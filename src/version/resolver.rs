//! Version resolution against a registry
//!
//! Lists the versions a registry publishes for a package and picks either the
//! greatest version above a base or the greatest version overall.

use tracing::debug;

use crate::version::error::{RegistryError, ResolveError};
use crate::version::registry::Registry;
use crate::version::semver::{is_newer, parse_version, sort_descending};

/// Resolves versions for packages published on a single registry
pub struct VersionResolver<R: Registry> {
    registry: R,
}

impl<R: Registry> VersionResolver<R> {
    /// Create a new VersionResolver backed by the given registry
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// List every version the registry publishes for a package
    ///
    /// Versions keep the order of the registry's metadata. A registry with no
    /// data for the package yields an empty list.
    pub async fn list_versions(&self, package_name: &str) -> Result<Vec<String>, RegistryError> {
        let metadata = self.registry.fetch_package_metadata(package_name).await?;
        Ok(metadata
            .map(|metadata| metadata.version_names())
            .unwrap_or_default())
    }

    /// Find the greatest published version strictly newer than `base_version`
    ///
    /// # Returns
    /// * `Ok(Some(version))` - The newest version above the base
    /// * `Ok(None)` - Nothing newer is published
    /// * `Err(ResolveError::InvalidVersion)` - `base_version` is not semver
    pub async fn resolve_next_version(
        &self,
        base_version: &str,
        package_name: &str,
    ) -> Result<Option<String>, ResolveError> {
        let base = parse_version(base_version).map_err(|source| ResolveError::InvalidVersion {
            version: base_version.to_string(),
            source,
        })?;

        let versions = self.list_versions(package_name).await?;
        let next = sort_descending(versions)
            .into_iter()
            .find(|(_, parsed)| is_newer(parsed, &base))
            .map(|(original, _)| original);

        debug!(
            "Next version of {} above {}: {:?}",
            package_name, base_version, next
        );
        Ok(next)
    }

    /// Find the greatest published version of a package
    pub async fn resolve_latest_version(
        &self,
        package_name: &str,
    ) -> Result<Option<String>, RegistryError> {
        let versions = self.list_versions(package_name).await?;
        let latest = sort_descending(versions)
            .into_iter()
            .next()
            .map(|(original, _)| original);

        debug!("Latest version of {}: {:?}", package_name, latest);
        Ok(latest)
    }
}
