//! Global update check for the CLI itself

use std::fmt;

use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::registry::Registry;
use crate::version::resolver::VersionResolver;

/// A newer published version of the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNotice {
    pub package_name: String,
    pub current_version: String,
    pub latest_version: String,
}

impl fmt::Display for UpdateNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Please update {} manually. Current version: {}, latest version: {}. \
             Update command: npm install -g {}",
            self.package_name, self.current_version, self.latest_version, self.package_name
        )
    }
}

/// Looks for a published version newer than `current_version`
///
/// Returns a notice only when the registry publishes something strictly newer.
pub async fn check_global_update<R: Registry>(
    resolver: &VersionResolver<R>,
    package_name: &str,
    current_version: &str,
) -> Result<Option<UpdateNotice>, ResolveError> {
    let Some(latest) = resolver
        .resolve_next_version(current_version, package_name)
        .await?
    else {
        debug!("{} {} is up to date", package_name, current_version);
        return Ok(None);
    };

    // resolve_next_version only returns versions strictly newer than the current one
    Ok(Some(UpdateNotice {
        package_name: package_name.to_string(),
        current_version: current_version.to_string(),
        latest_version: latest,
    }))
}
