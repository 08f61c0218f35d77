//! Environment guards run before any command

use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(test)]
use mockall::automock;

use semver::Version;
use tracing::{debug, info};

use crate::bootstrap::error::BootstrapError;
use crate::config::{CLI_HOME_VAR, CliConfig};
use crate::version::semver::{cmp_precedence, parse_version};

/// Facts about the machine the checks inspect
#[cfg_attr(test, automock)]
pub trait Host: Send + Sync {
    /// Raw output of `node --version` (e.g. "v18.17.0")
    fn node_version(&self) -> Result<String, BootstrapError>;

    /// Effective user id, or None where the platform has no such notion
    fn effective_uid(&self) -> Option<u32>;

    /// Home directory of the current user
    fn home_dir(&self) -> Option<PathBuf>;

    /// `CLI_HOME` as set in the process environment
    fn cli_home_var(&self) -> Option<String>;
}

/// The host this process is running on
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn node_version(&self) -> Result<String, BootstrapError> {
        let output = Command::new("node")
            .arg("--version")
            .output()
            .map_err(BootstrapError::NodeNotFound)?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() {
            return Err(BootstrapError::InvalidNodeVersion(stdout));
        }
        Ok(stdout)
    }

    #[cfg(unix)]
    fn effective_uid(&self) -> Option<u32> {
        Some(nix::unistd::geteuid().as_raw())
    }

    #[cfg(not(unix))]
    fn effective_uid(&self) -> Option<u32> {
        None
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn cli_home_var(&self) -> Option<String> {
        std::env::var(CLI_HOME_VAR).ok()
    }
}

/// Logs the version of the running binary
pub fn check_pkg_version(current_version: &str) {
    info!("scaffold-cli {}", current_version);
}

/// Fails unless `current` is at least `lowest`
pub fn check_node_version(current: &str, lowest: &str) -> Result<Version, BootstrapError> {
    let current_parsed = parse_version(current)
        .map_err(|_| BootstrapError::InvalidNodeVersion(current.to_string()))?;
    let lowest_parsed = parse_version(lowest)
        .map_err(|_| BootstrapError::InvalidNodeVersion(lowest.to_string()))?;

    if cmp_precedence(&current_parsed, &lowest_parsed).is_lt() {
        return Err(BootstrapError::NodeTooOld {
            current: current_parsed.to_string(),
            lowest: lowest_parsed.to_string(),
        });
    }

    debug!("Node.js v{} satisfies >= v{}", current_parsed, lowest_parsed);
    Ok(current_parsed)
}

/// Fails when running with root privileges
pub fn check_root(effective_uid: Option<u32>) -> Result<(), BootstrapError> {
    debug!("Effective uid: {:?}", effective_uid);
    match effective_uid {
        Some(0) => Err(BootstrapError::RootUser),
        _ => Ok(()),
    }
}

/// Returns the home directory if it exists on disk
pub fn check_user_home(home: Option<PathBuf>) -> Result<PathBuf, BootstrapError> {
    match home {
        Some(home) if home.exists() => Ok(home),
        _ => Err(BootstrapError::HomeNotFound),
    }
}

/// Loads `~/.env` and builds the configuration for this invocation
pub fn check_env(
    home: &Path,
    process_cli_home: Option<String>,
) -> Result<CliConfig, BootstrapError> {
    let config = CliConfig::load(home, process_cli_home)?;
    info!("CLI home: {}", config.cli_home.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("v18.17.0", "12.0.0", Version::new(18, 17, 0))]
    #[case("v12.0.0", "12.0.0", Version::new(12, 0, 0))]
    #[case("20.1.0", "v12.0.0", Version::new(20, 1, 0))]
    fn check_node_version_accepts_supported_versions(
        #[case] current: &str,
        #[case] lowest: &str,
        #[case] expected: Version,
    ) {
        assert_eq!(check_node_version(current, lowest).unwrap(), expected);
    }

    #[test]
    fn check_node_version_rejects_old_node() {
        let result = check_node_version("v10.24.1", "12.0.0");

        match result {
            Err(BootstrapError::NodeTooOld { current, lowest }) => {
                assert_eq!(current, "10.24.1");
                assert_eq!(lowest, "12.0.0");
            }
            other => panic!("expected NodeTooOld, got {:?}", other),
        }
    }

    #[rstest]
    #[case("", "12.0.0")]
    #[case("node: command output", "12.0.0")]
    #[case("v18.0.0", "twelve")]
    fn check_node_version_rejects_unparseable_versions(
        #[case] current: &str,
        #[case] lowest: &str,
    ) {
        assert!(matches!(
            check_node_version(current, lowest),
            Err(BootstrapError::InvalidNodeVersion(_))
        ));
    }

    #[rstest]
    #[case(Some(1000), true)]
    #[case(None, true)]
    #[case(Some(0), false)]
    fn check_root_rejects_uid_zero(#[case] uid: Option<u32>, #[case] ok: bool) {
        assert_eq!(check_root(uid).is_ok(), ok);
    }

    #[cfg(unix)]
    #[test]
    fn system_host_reports_effective_uid_on_unix() {
        assert!(SystemHost.effective_uid().is_some());
    }

    #[test]
    fn check_user_home_returns_existing_dir() {
        let temp_dir = TempDir::new().unwrap();

        let home = check_user_home(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_eq!(home, temp_dir.path());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(PathBuf::from("/definitely/not/a/real/home")))]
    fn check_user_home_rejects_missing_dir(#[case] home: Option<PathBuf>) {
        assert!(matches!(
            check_user_home(home),
            Err(BootstrapError::HomeNotFound)
        ));
    }

    #[test]
    fn check_env_uses_cli_home_from_dotenv() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".env"), "CLI_HOME=.custom-home\n").unwrap();

        let config = check_env(temp_dir.path(), None).unwrap();

        assert_eq!(config.cli_home, temp_dir.path().join(".custom-home"));
    }

    #[test]
    fn check_env_prefers_process_cli_home() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".env"), "CLI_HOME=.custom-home\n").unwrap();

        let config = check_env(temp_dir.path(), Some(".from-process".to_string())).unwrap();

        assert_eq!(config.cli_home, temp_dir.path().join(".from-process"));
    }
}
