//! Bootstrap sequence run before any command
//!
//! Each step is a guard: the first failure stops the sequence and is handed
//! back to the caller.
//!
//! # Modules
//!
//! - [`checks`]: Node.js version, root user, home directory and `.env` checks
//! - [`update`]: Global update check against the registry
//! - [`error`]: Error type shared by every step

pub mod checks;
pub mod error;
pub mod update;

use tracing::{info, warn};

use crate::bootstrap::checks::{
    Host, check_env, check_node_version, check_pkg_version, check_root, check_user_home,
};
use crate::bootstrap::error::BootstrapError;
use crate::bootstrap::update::{UpdateNotice, check_global_update};
use crate::config::{CliConfig, LOWEST_NODE_VERSION, PACKAGE_NAME, PACKAGE_VERSION};
use crate::version::registry::Registry;
use crate::version::resolver::VersionResolver;

/// What the bootstrap checks against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Name the CLI is published under
    pub package_name: String,
    /// Version of the running CLI
    pub current_version: String,
    /// Minimum supported Node.js version
    pub lowest_node_version: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            package_name: PACKAGE_NAME.to_string(),
            current_version: PACKAGE_VERSION.to_string(),
            lowest_node_version: LOWEST_NODE_VERSION.to_string(),
        }
    }
}

/// Outcome of a successful bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub config: CliConfig,
    pub update: Option<UpdateNotice>,
}

/// Run every bootstrap check in order
pub async fn prepare<H, R>(
    options: &BootstrapOptions,
    host: &H,
    resolver: &VersionResolver<R>,
) -> Result<Prepared, BootstrapError>
where
    H: Host + ?Sized,
    R: Registry,
{
    check_pkg_version(&options.current_version);

    let node_version = host.node_version()?;
    let node_version = check_node_version(&node_version, &options.lowest_node_version)?;
    info!("Node.js v{}", node_version);

    check_root(host.effective_uid())?;

    let home = check_user_home(host.home_dir())?;
    let config = check_env(&home, host.cli_home_var())?;

    let update =
        check_global_update(resolver, &options.package_name, &options.current_version).await?;
    if let Some(notice) = &update {
        warn!("{}", notice);
    }

    Ok(Prepared { config, update })
}
