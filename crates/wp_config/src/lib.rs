//! Configuration management for the whitepaper agent
//!
//! This crate handles loading and validating `wp.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wp_common::{Result, WpError};

/// File name looked up in the workspace root
pub const CONFIG_FILE: &str = "wp.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory relative paths are resolved against (set programmatically, not in TOML)
    #[serde(skip)]
    pub root: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Search presentation settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Content source settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration ([server])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Name reported by `initialize`
    #[serde(default = "default_server_name")]
    pub name: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_server_name() -> String {
    "succinct-whitepaper-agent".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            name: default_server_name(),
        }
    }
}

/// Search configuration ([search])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results shown per search response
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Characters of content shown per result before clipping
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

fn default_max_results() -> usize {
    5
}
fn default_snippet_chars() -> usize {
    1000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            snippet_chars: default_snippet_chars(),
        }
    }
}

/// Content configuration ([content])
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// JSON document replacing the built-in whitepaper
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Logging configuration ([logging])
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from workspace root
    ///
    /// A missing `wp.toml` yields the defaults.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(CONFIG_FILE);

        if !config_path.exists() {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, workspace_root);
            return Ok(Self {
                root: workspace_root.to_path_buf(),
                ..Self::default()
            });
        }

        Self::from_file(&config_path)
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WpError::ConfigError(format!("Failed to read config {:?}: {}", path, e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| WpError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Resolved path of the content file, if one is configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.content.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.root.join(p)
            }
        })
    }

    fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(WpError::ConfigError(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        if self.search.snippet_chars == 0 {
            return Err(WpError::ConfigError(
                "search.snippet_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
