//! Application configuration.
//!
//! DESIGN
//! ======
//! The role -> home-page table, the admin account list and site copy are
//! immutable once loaded. `App` parses them once at startup and hands them to
//! the rest of the tree through context, so nothing reads ambient globals and
//! tests can build their own `AppConfig`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;
use std::time::Duration;

use gate::{Role, RoleDefaultMap, RoleParseError};
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

const DEFAULT_SITE_NAME: &str = "LearnHub";
const DEFAULT_TAGLINE: &str = "Courses, coursework and grades in one place.";
const DEFAULT_AUTH_ENDPOINT: &str = "/api/auth";
const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("role_defaults: {0}")]
    Role(#[from] RoleParseError),
    #[error("{field} must be an absolute path, got {value:?}")]
    RelativePath { field: String, value: String },
}

/// Immutable, process-wide settings for the front-end shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub site_name: String,
    pub tagline: String,
    /// Base path of the external auth provider's HTTP API.
    pub auth_endpoint: String,
    pub role_defaults: RoleDefaultMap,
    /// Lowercased addresses that always resolve to [`Role::Admin`].
    pub admin_emails: Vec<String>,
    pub toast_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            tagline: DEFAULT_TAGLINE.to_owned(),
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(),
            role_defaults: RoleDefaultMap::default(),
            admin_emails: Vec::new(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    site_name: String,
    tagline: String,
    auth_endpoint: String,
    role_defaults: Option<BTreeMap<String, String>>,
    admin_emails: Vec<String>,
    toast_duration_ms: u64,
}

impl Default for RawConfig {
    fn default() -> Self {
        let defaults = AppConfig::default();
        Self {
            site_name: defaults.site_name,
            tagline: defaults.tagline,
            auth_endpoint: defaults.auth_endpoint,
            role_defaults: None,
            admin_emails: defaults.admin_emails,
            toast_duration_ms: defaults.toast_duration_ms,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config document. Missing keys keep their defaults; a
    /// present `role_defaults` object replaces the whole table.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unknown role keys, or paths that
    /// are not absolute.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let role_defaults = match raw.role_defaults {
            None => RoleDefaultMap::default(),
            Some(entries) => entries
                .into_iter()
                .map(|(role, path)| -> Result<(Role, String), ConfigError> {
                    let role = role.parse::<Role>()?;
                    let path = absolute_path(&format!("role_defaults.{role}"), path)?;
                    Ok((role, path))
                })
                .collect::<Result<RoleDefaultMap, ConfigError>>()?,
        };

        let auth_endpoint = if raw.auth_endpoint.starts_with("http://") || raw.auth_endpoint.starts_with("https://") {
            raw.auth_endpoint
        } else {
            absolute_path("auth_endpoint", raw.auth_endpoint)?
        };

        let admin_emails = raw
            .admin_emails
            .iter()
            .map(|email| email.trim().to_ascii_lowercase())
            .filter(|email| !email.is_empty())
            .collect();

        Ok(Self {
            site_name: raw.site_name,
            tagline: raw.tagline,
            auth_endpoint: auth_endpoint.trim_end_matches('/').to_owned(),
            role_defaults,
            admin_emails,
            toast_duration_ms: raw.toast_duration_ms,
        })
    }

    /// Load the configuration bundled with the client, falling back to
    /// defaults when it does not parse.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("bundled config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn absolute_path(field: &str, value: String) -> Result<String, ConfigError> {
    if value.starts_with('/') {
        Ok(value)
    } else {
        Err(ConfigError::RelativePath { field: field.to_owned(), value })
    }
}
