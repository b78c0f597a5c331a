use serde::Deserialize;
use service_core::config::{self as core_config, MongoConfig};
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "analytics";

#[derive(Debug, Clone, Deserialize)]
pub struct HcpConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

impl HcpConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(HcpConfig {
            common: core_config::Config::load(DEFAULT_PORT)?,
            mongodb: MongoConfig::load(DEFAULT_DATABASE)?,
        })
    }
}
