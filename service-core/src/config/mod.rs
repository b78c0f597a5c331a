use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads `.env`, an optional `configuration` file and `APP__*` variables.
    ///
    /// `default_port` is the service's fixed listening port, used unless
    /// `APP__PORT` (or `port` in the file) overrides it.
    pub fn load(default_port: u16) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("port", i64::from(default_port))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";

impl MongoConfig {
    pub fn load(default_database: &str) -> Result<Self, AppError> {
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(MongoConfig {
            uri: get_env("MONGODB_URI", Some(DEFAULT_MONGODB_URI), is_prod)?,
            database: get_env("MONGODB_DATABASE", Some(default_database), is_prod)?,
        })
    }
}

/// Reads `key` from the environment. Defaults only apply outside production.
pub fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_wins_over_default() {
        let value = resolve("MONGODB_URI", Some("mongodb://db:27017".into()), Some("x"), true);
        assert_eq!(value.unwrap(), "mongodb://db:27017");
    }

    #[test]
    fn default_used_outside_production() {
        let value = resolve("MONGODB_DATABASE", None, Some("analytics"), false);
        assert_eq!(value.unwrap(), "analytics");
    }

    #[test]
    fn production_requires_explicit_value() {
        let err = resolve("MONGODB_URI", None, Some(DEFAULT_MONGODB_URI), true).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn missing_without_default_is_an_error() {
        let err = resolve("MONGODB_URI", None, None, false).unwrap_err();
        assert!(err.to_string().contains("MONGODB_URI is required but not set"));
    }
}
