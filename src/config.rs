//! Server configuration from environment variables.
//!
//! | Variable     | Default   | Meaning                                  |
//! |--------------|-----------|------------------------------------------|
//! | `HOST`       | `0.0.0.0` | Listen address                           |
//! | `PORT`       | `3000`    | Listen port                              |
//! | `SITE_ROOT`  | Leptos    | Directory holding the `pkg/` bundle      |
//! | `LOG_FORMAT` | `pretty`  | `pretty` or `json` log lines             |
//!
//! Empty values count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    Port(String),
    #[error("invalid HOST {0:?}")]
    Host(String),
    #[error("invalid LOG_FORMAT {0:?}, expected \"pretty\" or \"json\"")]
    LogFormat(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::LogFormat(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos site root when serving `/pkg`.
    pub site_root: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            site_root: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let host = match get("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Host(raw))?,
            None => defaults.host,
        };
        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Port(raw))?,
            None => defaults.port,
        };
        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self { host, port, site_root: get("SITE_ROOT").map(PathBuf::from), log_format })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
