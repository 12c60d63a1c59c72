//! Process configuration: defaults overlaid with `HRIS_*` environment
//! variables.

use std::time::Duration;

use hris_db::DbConfig;
use hris_service::ServiceConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} and {1} must be set together")]
    Incomplete(&'static str, &'static str),
}

/// Credentials for the HR account created on first start.
#[derive(Clone)]
pub struct BootstrapAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub db: DbConfig,
    pub service: ServiceConfig,
    pub bootstrap: Option<BootstrapAccount>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(url) = lookup("HRIS_DB_URL") {
            config.db.url = url;
        }
        if let Some(ns) = lookup("HRIS_DB_NAMESPACE") {
            config.db.namespace = ns;
        }
        if let Some(db) = lookup("HRIS_DB_DATABASE") {
            config.db.database = db;
        }
        if let Some(user) = lookup("HRIS_DB_USERNAME") {
            config.db.username = user;
        }
        if let Some(pass) = lookup("HRIS_DB_PASSWORD") {
            config.db.password = pass;
        }

        if let Some(raw) = lookup("HRIS_REPO_TIMEOUT_MS") {
            let millis = raw
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::Invalid {
                    key: "HRIS_REPO_TIMEOUT_MS",
                    expected: "a positive integer",
                    value: raw.clone(),
                })?;
            config.service.repo_timeout = Duration::from_millis(millis);
        }
        config.service.pepper = lookup("HRIS_PASSWORD_PEPPER").filter(|p| !p.is_empty());

        config.bootstrap = match (
            lookup("HRIS_BOOTSTRAP_EMAIL"),
            lookup("HRIS_BOOTSTRAP_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(BootstrapAccount {
                name: lookup("HRIS_BOOTSTRAP_NAME").unwrap_or_else(|| "HR Administrator".into()),
                email,
                password,
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Incomplete(
                    "HRIS_BOOTSTRAP_EMAIL",
                    "HRIS_BOOTSTRAP_PASSWORD",
                ));
            }
        };

        Ok(config)
    }
}
