//! Configuration management for coinfall using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fetch::USER_AGENT;
use crate::models::CoinConfig;

/// Default base URL of the coin data server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3030";

/// Default bind address of the development host.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Default directory holding the browser build.
const DEFAULT_PKG_DIR: &str = "pkg";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL whose `/coin-data` endpoint is fetched.
    pub server_url: String,
    /// Request timeout in seconds (0 disables the timeout).
    pub request_timeout: u64,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Bind address of the development host.
    pub bind: String,
    /// Directory holding the browser build served under `/pkg`.
    pub pkg_dir: PathBuf,
    /// Coin generator bounds.
    pub coins: CoinConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: 30,
            user_agent: USER_AGENT.to_string(),
            bind: DEFAULT_BIND.to_string(),
            pkg_dir: PathBuf::from(DEFAULT_PKG_DIR),
            coins: CoinConfig::default(),
        }
    }
}

impl Settings {
    /// Apply `COINFALL_*` overrides read through `lookup`.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(url) = var("COINFALL_SERVER_URL") {
            tracing::debug!("Using COINFALL_SERVER_URL from environment: {}", url);
            self.server_url = url;
        }
        if let Some(timeout) = var("COINFALL_REQUEST_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => self.request_timeout = secs,
                Err(_) => tracing::warn!("Ignoring invalid COINFALL_REQUEST_TIMEOUT: {}", timeout),
            }
        }
        if let Some(dir) = var("COINFALL_PKG_DIR") {
            self.pkg_dir = PathBuf::from(dir);
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the coin data server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Bind address of the development host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Directory holding the browser build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg_dir: Option<String>,
    /// Coin generator bounds.
    #[serde(default, skip_serializing_if = "CoinConfig::is_default")]
    pub coins: CoinConfig,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers coinfall config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("coinfall").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory of the config file, if loaded from one.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref url) = self.server_url {
            settings.server_url = url.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref pkg_dir) = self.pkg_dir {
            settings.pkg_dir = self.resolve_path(pkg_dir, base_dir);
        }
        settings.coins = self.coins.clone();
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
}

/// Load config from the explicit path or by discovery.
async fn load_file_config(options: &LoadOptions) -> Config {
    if let Some(ref config_path) = options.config_path {
        return match Config::load_from_path(config_path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                Config::default()
            }
        };
    }

    Config::load().await
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = load_file_config(&options).await;
    let settings = settings_from_config(&config, options.use_cwd, |name| std::env::var(name).ok());
    (settings, config)
}

fn settings_from_config(
    config: &Config,
    use_cwd: bool,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = if use_cwd {
        cwd()
    } else {
        config.base_dir().unwrap_or_else(cwd)
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);
    settings.apply_env_overrides(env);
    settings
}
