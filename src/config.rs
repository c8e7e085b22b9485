//! Server configuration.
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `SORT_SERVER_*` environment variables.

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::benchmark::TimingUnit;
use crate::service::ServiceSettings;

/// Prefix for environment overrides, e.g. `SORT_SERVER_PORT=9090`.
pub const ENV_PREFIX: &str = "SORT_SERVER_";

/// Environment variable naming the TOML file.
pub const CONFIG_PATH_VAR: &str = "SORT_SERVER_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "sort-server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Number of actix workers; actix picks one per core when unset.
    pub workers: Option<usize>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub benchmark_unit: TimingUnit,
    pub sort_unit: TimingUnit,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
            log_filter: "info".to_string(),
            benchmark_unit: TimingUnit::Millis,
            sort_unit: TimingUnit::Nanos,
            max_body_bytes: 64 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load from the file named by `SORT_SERVER_CONFIG` (or `sort-server.toml`)
    /// plus the environment. A missing file is not an error.
    pub fn load() -> Result<Self, figment::Error> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::figment(path).extract()
    }

    pub fn figment(path: impl Into<PathBuf>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.into()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            benchmark_unit: self.benchmark_unit,
            sort_unit: self.sort_unit,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
