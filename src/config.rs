use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// =============================================================================
// Package constants
// =============================================================================

/// Name this tool is published under on the npm registry
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Version of the running binary
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum Node.js version required by the scaffolding templates
pub const LOWEST_NODE_VERSION: &str = "12.0.0";

/// Directory under the user's home used when `CLI_HOME` is not set
pub const DEFAULT_CLI_HOME: &str = ".scaffold-cli";

/// Variable naming the CLI home directory, relative to the user's home
pub const CLI_HOME_VAR: &str = "CLI_HOME";

/// Timeout for registry requests in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Registries
// =============================================================================

/// npm mirror used by default
pub const MIRROR_REGISTRY: &str = "https://registry.npmmirror.com";

/// Upstream npm registry
pub const ORIGINAL_REGISTRY: &str = "https://registry.npmjs.org";

/// Returns the default registry base URL.
///
/// `is_original` selects the upstream registry instead of the mirror.
pub fn default_registry(is_original: bool) -> &'static str {
    if is_original {
        ORIGINAL_REGISTRY
    } else {
        MIRROR_REGISTRY
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration built once per invocation and passed to whoever needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// The user's home directory
    pub home: PathBuf,
    /// Directory the CLI keeps its own files in
    pub cli_home: PathBuf,
    /// Variables loaded from `~/.env`
    pub env: HashMap<String, String>,
}

impl CliConfig {
    /// Loads `home/.env` (if present) and resolves the CLI home directory.
    ///
    /// `process_cli_home` is the `CLI_HOME` value from the process
    /// environment; it takes precedence over the value in `.env`.
    pub fn load(home: &Path, process_cli_home: Option<String>) -> Result<Self, ConfigError> {
        let env = load_env_file(&home.join(".env"))?;
        Ok(Self::from_env(home, env, process_cli_home))
    }

    fn from_env(
        home: &Path,
        env: HashMap<String, String>,
        process_cli_home: Option<String>,
    ) -> Self {
        let cli_home_var = process_cli_home.or_else(|| env.get(CLI_HOME_VAR).cloned());
        Self {
            home: home.to_path_buf(),
            cli_home: cli_home_with_env(home, cli_home_var.as_deref()),
            env,
        }
    }
}

fn cli_home_with_env(home: &Path, cli_home_var: Option<&str>) -> PathBuf {
    match cli_home_var {
        Some(dir) if !dir.is_empty() => home.join(dir),
        _ => home.join(DEFAULT_CLI_HOME),
    }
}

static ENV_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?([A-Za-z_][A-Za-z0-9_.-]*)\s*=\s*(.*?)\s*$")
        .expect("env line pattern is valid")
});

/// Reads a dotenv-style file. A missing file yields no variables.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_env(&contents))
}

/// Parses `KEY=VALUE` lines. Later keys override earlier ones.
pub fn parse_env(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| ENV_LINE.captures(line))
        .map(|caps| (caps[1].to_string(), unquote(&caps[2]).to_string()))
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        // Anything after the closing quote is a comment or noise
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.find(quote).map(|end| &rest[..end]))
        {
            return inner;
        }
    }
    // Unquoted values may carry a trailing comment
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

/// Returns the path to the data directory for scaffold-cli.
/// Uses $XDG_DATA_HOME/scaffold-cli if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/scaffold-cli,
/// or ./scaffold-cli if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("scaffold-cli.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("scaffold-cli")
}
