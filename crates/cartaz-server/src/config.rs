//! `AppConfig` struct and TOML read.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default bind address.
fn default_bind() -> String {
    String::from("0.0.0.0:8080")
}

/// Default TMDB API base URL.
fn default_base_url() -> String {
    String::from("https://api.themoviedb.org/3/")
}

/// Default image CDN base URL.
fn default_image_base_url() -> String {
    String::from("https://image.tmdb.org/t/p/w500")
}

/// Default display language requested from TMDB.
fn default_language() -> String {
    String::from("pt-BR")
}

/// Default region used for certification lookup.
fn default_region() -> String {
    String::from("BR")
}

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// TMDB upstream settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to bind.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// TMDB upstream configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API key. The `TMDB_API_KEY` environment variable takes
    /// precedence over this value.
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Image CDN base URL prepended to relative poster/backdrop paths.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Display language requested on every upstream call.
    #[serde(default = "default_language")]
    pub language: String,
    /// Region code (ISO 3166-1) used to resolve age certifications.
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            region: default_region(),
        }
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl TmdbConfig {
    /// Resolves the API key, preferring the environment override.
    ///
    /// # Errors
    ///
    /// Returns an error when neither the override nor the config file
    /// provides a non-empty key.
    pub fn resolve_api_key(&self, env_override: Option<String>) -> Result<String> {
        env_override
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.is_empty()))
            .context("TMDB API key not configured: set TMDB_API_KEY or [tmdb] api_key")
    }
}
