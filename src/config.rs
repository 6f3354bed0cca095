//! Configuration management for the track share service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a single [`Config`] value that is built
//! once at startup and handed to the server, the token manager and the CLI.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SEARCH_PAGE_URL: &str = "https://open.spotify.com/search";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

const PRODUCTION: &str = "production";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is loaded first, then the one in the
/// platform-specific local data directory under `trackshare/.env`. Variables
/// that are already set are never overwritten, so the real environment always
/// wins. Missing files are not an error; the service can run purely from the
/// process environment.
///
/// # Directory Structure
///
/// The function looks for the second `.env` file in:
/// - Linux: `~/.local/share/trackshare/.env`
/// - macOS: `~/Library/Application Support/trackshare/.env`
/// - Windows: `%LOCALAPPDATA%/trackshare/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub async fn load_env() -> Result<()> {
    if dotenv::dotenv().is_ok() {
        tracing::debug!("Loaded .env from working directory");
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("Failed to load {}: {}", path.display(), e)))?;
    }

    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackshare/.env");
    path
}

/// Client credentials used for the client-credentials grant.
///
/// Empty values are allowed; the identity endpoint rejects them and the
/// failure surfaces as a token error on the first search.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub server_host: String,
    pub server_port: u16,
    /// Value of `APP_ENV`.
    pub environment: Option<String>,
    pub token_url: String,
    pub api_url: String,
    pub search_page_url: String,
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            credentials: Credentials::default(),
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            environment: None,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            search_page_url: DEFAULT_SEARCH_PAGE_URL.to_string(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `PORT` or `UPSTREAM_TIMEOUT_SECS` is set but
    /// is not a valid number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let server_port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("Invalid PORT '{}': {}", port, e)))?,
            None => DEFAULT_PORT,
        };

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => secs.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("Invalid UPSTREAM_TIMEOUT_SECS '{}': {}", secs, e))
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Config {
            credentials: Credentials {
                client_id: lookup("SPOTIFY_CLIENT_ID").unwrap_or_default(),
                client_secret: lookup("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            },
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            environment: get("APP_ENV"),
            token_url: get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            search_page_url: get("SPOTIFY_SEARCH_PAGE_URL")
                .unwrap_or_else(|| DEFAULT_SEARCH_PAGE_URL.to_string()),
            upstream_timeout_secs,
        })
    }

    /// Whether the service runs under an external host that invokes the
    /// router directly, in which case no listener is started.
    pub fn is_production(&self) -> bool {
        self.environment
            .as_deref()
            .is_some_and(|env| env.eq_ignore_ascii_case(PRODUCTION))
    }

    /// Returns the address for the self-hosted listener, e.g. `0.0.0.0:3000`.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.search_page_url, DEFAULT_SEARCH_PAGE_URL);
        assert!(config.credentials.client_id.is_empty());
        assert!(!config.is_production());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("PORT", "8080"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SPOTIFY_API_URL", "http://localhost:9000/v1"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.credentials.client_id, "id");
        assert_eq!(config.credentials.client_secret, "secret");
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.api_url, "http://localhost:9000/v1");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn production_flag_disables_listener() {
        assert!(config_from(&[("APP_ENV", "production")]).unwrap().is_production());
        assert!(config_from(&[("APP_ENV", "PRODUCTION")]).unwrap().is_production());
        assert!(!config_from(&[("APP_ENV", "development")]).unwrap().is_production());
    }

    #[test]
    fn secret_is_not_printed() {
        let config = config_from(&[("SPOTIFY_CLIENT_SECRET", "hunter2")]).unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
