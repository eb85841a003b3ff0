//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from a
//! base TOML file, an optional environment overlay, and `SHOWROOM__`-prefixed
//! environment variables. Each sub-module represents a logical section.

pub mod app;
pub mod auth;
pub mod logging;
pub mod session;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::logging::LoggingConfig;
use self::session::SessionConfig;

use crate::error::AppError;
use crate::result::AppResult;
use crate::secret::{SIGNING_SECRET_ENV, SigningSecret};

/// Default location of the base configuration file (without extension).
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Link registry / visibility store backend settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Share-session cookie settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Template catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which backend holds share links and template visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local maps; contents are lost on restart.
    #[default]
    Memory,
    /// PostgreSQL through `sqlx`.
    Postgres,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,
    /// PostgreSQL connection URL (only read for the postgres backend).
    #[serde(default)]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Static template catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default base file plus an overlay for `env`.
    pub fn load(env: &str) -> AppResult<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH, env)
    }

    /// Load configuration from `base` (TOML, extension optional), merging the
    /// sibling `<env>` overlay, `SHOWROOM__*` variables, and finally the
    /// dedicated signing-secret variable.
    pub fn load_from(base: &str, env: &str) -> AppResult<Self> {
        let base = base.trim_end_matches(".toml");
        let overlay = Path::new(base)
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(env);

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("SHOWROOM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.signing_secret", std::env::var(SIGNING_SECRET_ENV).ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Resolves the signing secret. A missing secret is a fatal startup error.
    pub fn signing_secret(&self) -> AppResult<SigningSecret> {
        SigningSecret::from_option(self.auth.signing_secret.as_deref())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_catalog_path() -> String {
    "config/catalog.json".to_string()
}
