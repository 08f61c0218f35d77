//! Host test utilities

use std::path::PathBuf;

use scaffold_cli::bootstrap::checks::Host;
use scaffold_cli::bootstrap::error::BootstrapError;

/// Host with fixed facts
pub struct StubHost {
    pub node_version: Option<String>,
    pub effective_uid: Option<u32>,
    pub home_dir: Option<PathBuf>,
    pub cli_home_var: Option<String>,
}

impl StubHost {
    /// A non-root user with a supported Node.js and the given home
    pub fn new(home_dir: PathBuf) -> Self {
        Self {
            node_version: Some("v18.17.0".to_string()),
            effective_uid: Some(1000),
            home_dir: Some(home_dir),
            cli_home_var: None,
        }
    }
}

impl Host for StubHost {
    fn node_version(&self) -> Result<String, BootstrapError> {
        self.node_version
            .clone()
            .ok_or_else(|| BootstrapError::NodeNotFound(std::io::ErrorKind::NotFound.into()))
    }

    fn effective_uid(&self) -> Option<u32> {
        self.effective_uid
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }

    fn cli_home_var(&self) -> Option<String> {
        self.cli_home_var.clone()
    }
}
