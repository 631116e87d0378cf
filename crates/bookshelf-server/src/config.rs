// File: src/config.rs
// Purpose: Configuration parsing from bookshelf.toml with environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "bookshelf.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub widgets: WidgetsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// SQLx connection URL (default: "sqlite://bookshelf.db")
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoutingConfig {
    /// Whether page routes are case-insensitive (default: false)
    #[serde(default)]
    pub case_insensitive: bool,
}

/// Assets contributed by the UI widget kit to every page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub stylesheets: Vec<String>,

    #[serde(default)]
    pub scripts: Vec<String>,
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://bookshelf.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// Load from `BOOKSHELF_CONFIG` (or ./bookshelf.toml), then apply env overrides
    pub fn load_from_env() -> Result<Self> {
        let path =
            std::env::var("BOOKSHELF_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let config = Self::load(&path)?;
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `DATABASE_URL`, `HOST` and `PORT` overrides from a lookup function
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?;
        }
        Ok(self)
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
