//! Layered server configuration
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. YAML file given with `--config`
//! 3. Environment variables (`CIRCUITS__` prefix, `__` between sections)
//!
//! `CIRCUITS__SERVER__BIND_ADDR` maps to `server.bind_addr`,
//! `CIRCUITS__MODULES__LEVELS__DEFAULT_DIFFICULTY` to
//! `modules.levels.default_difficulty`.

use crate::logging::LoggingConfig;
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "CIRCUITS__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Upper bound for handling a single request
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,

    /// Apply pending migrations before serving
    pub auto_migrate: bool,

    /// Log every SQL statement
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://circuits.db?mode=rwc".to_string(),
            max_connections: 10,
            auto_migrate: true,
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModulesConfig {
    #[serde(default)]
    pub levels: levels::Config,
    #[serde(default)]
    pub retail: retail::Config,
}

impl AppConfig {
    /// Build the provider chain without extracting it
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load and validate the effective configuration
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
        }

        let config: Self = Self::figment(path)
            .extract()
            .context("invalid configuration")?;

        config.modules.levels.validate()?;
        config.modules.retail.validate()?;
        if config.database.max_connections == 0 {
            bail!("invalid database config: max_connections must be positive");
        }

        Ok(config)
    }
}
