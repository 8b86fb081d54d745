//! Runtime configuration.
//!
//! # Responsibility
//! - Load settings from an optional TOML file.
//! - Apply `STOREHUB_*` environment overrides on top of the file.
//! - Hand out the pieces the core needs (tenant resolver, database handle).
//!
//! # Invariants
//! - A missing file is not an error; defaults apply.
//! - The tenant header name is never blank after `validate()`.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::default_log_level;
use crate::tenant::{TenantResolver, DEFAULT_TENANT_HEADER};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "STOREHUB_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "STOREHUB_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STOREHUB_LOG_DIR";
pub const ENV_TENANT_HEADER: &str = "STOREHUB_TENANT_HEADER";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite file path. `None` selects an in-memory database.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`; build-mode default when unset.
    pub level: Option<String>,
    /// Absolute directory for rolling log files. No file logging when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TenancyConfig {
    /// Request header carrying the tenant company id.
    pub header: String,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_TENANT_HEADER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreHubConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub tenancy: TenancyConfig,
}

impl StoreHubConfig {
    /// Parses a TOML document. Omitted sections keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, then applies process environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                        path: path.to_path_buf(),
                        source,
                    })?;
                toml::from_str(&contents)?
            }
            _ => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from `lookup` (normally the process environment).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.database.path = non_blank(path).map(PathBuf::from);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = non_blank(level);
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.logging.dir = non_blank(dir).map(PathBuf::from);
        }
        if let Some(header) = lookup(ENV_TENANT_HEADER) {
            self.tenancy.header = header.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tenancy.header.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "tenancy.header must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective log level.
    pub fn log_level(&self) -> &str {
        self.logging
            .level
            .as_deref()
            .unwrap_or_else(|| default_log_level())
    }

    pub fn tenant_resolver(&self) -> TenantResolver {
        TenantResolver::new(self.tenancy.header.trim())
    }

    /// Opens one connection to the configured database.
    pub fn open_database(&self) -> DbResult<Connection> {
        match self.database.path.as_deref() {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
