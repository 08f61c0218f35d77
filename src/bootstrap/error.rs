use thiserror::Error;

use crate::config::ConfigError;
use crate::version::error::ResolveError;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Node.js not found on PATH: {0}")]
    NodeNotFound(#[source] std::io::Error),

    #[error("Could not read Node.js version from {0:?}")]
    InvalidNodeVersion(String),

    #[error("scaffold-cli requires Node.js v{lowest} or later (found v{current})")]
    NodeTooOld { current: String, lowest: String },

    #[error("Refusing to run as the root user")]
    RootUser,

    #[error("Home directory of the current user does not exist")]
    HomeNotFound,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
