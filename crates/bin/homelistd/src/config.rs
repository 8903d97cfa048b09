//! Daemon settings: an optional `homelist.toml`, then `HOMELIST_*` variables.
//!
//! Missing sections fall back to built-in defaults, so the service starts
//! with no file at all. `RUST_LOG` beats `HOMELIST_LOG`, and `HOMELIST_BIND`
//! beats `HOMELIST_HOST`/`HOMELIST_PORT`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File read when no `--config` flag is passed.
pub const DEFAULT_CONFIG_FILE: &str = "homelist.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite:homelist.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "homelistd=info,homelist=info,tower_http=debug";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Storage location, in `sqlx` URL form.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

/// `tracing-subscriber` filter directive.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Read `path` (or [`DEFAULT_CONFIG_FILE`]), apply process environment
    /// overrides and validate the result.
    ///
    /// # Errors
    ///
    /// Fails when an explicitly requested file is missing, when any file is
    /// unreadable or malformed, or when the merged settings are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => Self::read_optional(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    fn read_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::read(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay `HOMELIST_*` / `RUST_LOG` values obtained through `var`.
    ///
    /// Unparsable ports are ignored and keep the previous value.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("HOMELIST_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HOMELIST_PORT").and_then(|raw| raw.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = var("HOMELIST_BIND")
            && let Some((host, port)) = bind.rsplit_once(':')
        {
            self.server.host = host.to_owned();
            self.server.port = port.parse().unwrap_or(self.server.port);
        }
        if let Some(url) = var("HOMELIST_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("HOMELIST_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero"));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation("database.url must not be empty"));
        }
        Ok(())
    }

    /// `host:port` string handed to `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
