//! Configuration management for CRUD Admin
//!
//! Everything is read from the environment once, at startup. The data mode
//! in particular cannot change while the process runs.

use crate::error::{CrudError, Result};
use crud_types::DataMode;
use serde::Deserialize;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub data_mode: DataMode,
    pub xano_base_url: String,
    pub xano_api_key: String,
    pub bind_address: String,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_mode: DataMode::Demo,
            xano_base_url: String::new(),
            xano_api_key: String::new(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_environment(config::Environment::default())
    }

    /// Load from an explicit environment source and validate
    pub fn from_environment(env: config::Environment) -> Result<Self> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("data_mode", defaults.data_mode.to_string())?
            .set_default("xano_base_url", defaults.xano_base_url)?
            .set_default("xano_api_key", defaults.xano_api_key)?
            .set_default("bind_address", defaults.bind_address)?
            .set_default("seed_demo_data", defaults.seed_demo_data)?
            .add_source(env)
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Xano mode needs a base URL; the API key is optional for open endpoints
    pub fn validate(&self) -> Result<()> {
        if self.data_mode == DataMode::Xano && self.xano_base_url.trim().is_empty() {
            return Err(CrudError::InvalidConfig(
                "Missing required Xano environment variables: XANO_BASE_URL".to_string(),
            ));
        }
        Ok(())
    }

    pub fn api_key(&self) -> Option<&str> {
        let key = self.xano_api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}
