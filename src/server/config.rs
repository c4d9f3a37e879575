use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3001";
const DEFAULT_SWAGGER_PATH: &str = "./swagger.json";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_RETENTION_DAYS: u32 = 14;
const DEFAULT_APM_APP_NAME: &str = "BirdsWorld";
const DEFAULT_APM_LOG_LEVEL: &str = "info";

/// Settings for the APM log pipeline.
///
/// The service never talks to the APM backend itself; records are written to
/// stdout and collected by the backend's agent. These values label and filter
/// what is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApmConfig {
    pub app_name: String,
    pub license_key: String,
    /// `EnvFilter` directive for the console sink, e.g. `info` or `birdsworld=debug`.
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub swagger_path: PathBuf,

    pub log_dir: PathBuf,
    pub log_retention_days: u32,

    pub apm: ApmConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Only `DATABASE_URL` is required; every other setting has a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log_retention_days = match lookup("LOG_RETENTION_DAYS") {
            Some(value) => value.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "LOG_RETENTION_DAYS".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_LOG_RETENTION_DAYS,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: or_default("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            swagger_path: PathBuf::from(or_default("SWAGGER_PATH", DEFAULT_SWAGGER_PATH)),
            log_dir: PathBuf::from(or_default("LOG_DIR", DEFAULT_LOG_DIR)),
            log_retention_days,
            apm: ApmConfig {
                app_name: or_default("APM_APP_NAME", DEFAULT_APM_APP_NAME),
                license_key: or_default("APM_LICENSE_KEY", ""),
                log_level: or_default("APM_LOG_LEVEL", DEFAULT_APM_LOG_LEVEL),
            },
        })
    }
}
