use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_ROSTER_SHEET: &str = "Sheet1";
const DEFAULT_IMPORT_TIMEOUT_SECS: u64 = 300;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub smtp: SmtpConfig,

    pub admin_email: String,
    pub admin_password: String,

    /// Account that receives a fixed password instead of a generated, mailed one.
    pub bootstrap: Option<BootstrapAccount>,

    pub roster: RosterConfig,
}

pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Email and literal password of the bootstrap account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAccount {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Worksheet read from uploaded rosters; the first sheet is used if it is missing.
    pub sheet: String,
    pub import_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bootstrap = match (optional("BOOTSTRAP_EMAIL"), optional("BOOTSTRAP_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAccount { email, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("BOOTSTRAP_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("BOOTSTRAP_EMAIL".to_string()).into())
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            smtp: SmtpConfig {
                host: required("SMTP_HOST")?,
                port: parsed("SMTP_PORT", DEFAULT_SMTP_PORT)?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
                from: required("SMTP_FROM")?,
            },
            admin_email: required("ADMIN_EMAIL")?,
            admin_password: required("ADMIN_PASSWORD")?,
            bootstrap,
            roster: RosterConfig {
                sheet: optional("ROSTER_SHEET").unwrap_or_else(|| DEFAULT_ROSTER_SHEET.to_string()),
                import_timeout: Duration::from_secs(parsed(
                    "IMPORT_TIMEOUT_SECS",
                    DEFAULT_IMPORT_TIMEOUT_SECS,
                )?),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
